use hfield::Headers;

const RAW: &str = "\
Server: nginx\r
Cache-Control: no-cache\r
cache-control: no-store\r
Link: <https://api.example.com/items?page=2>; rel=\"next\", \
<https://api.example.com/items?page=9>; rel=\"last\"\r
";

fn main() {
    env_logger::init();

    let mut headers = Headers::from_lines(RAW);

    for header in &headers {
        println!("{}: {}", header.name(), header);
    }

    if let Some(cache) = headers.get_mut("cache-control") {
        cache.normalize(true);
        println!("cache directives: {:?}", cache.to_vec());
    }

    if let Some(link) = headers.get("link") {
        for group in link.parse_params() {
            let rel = group.get("rel").map(String::as_str).unwrap_or("-");
            let uri = group.keys().next().map(String::as_str).unwrap_or("-");
            println!("rel={rel} {uri}");
        }
    }
}
