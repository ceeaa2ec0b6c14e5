fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let domains = if args.is_empty() {
        vec![
            "example.com".to_string(),
            "bücher.example".to_string(),
            "münchen.de".to_string(),
            "xn--mnchen-3ya.de".to_string(),
            "xn--80aafi6cg.ru".to_string(),
            "a..b".to_string(),
        ]
    } else {
        args
    };

    println!("IDNA Transcoding");
    println!("================");

    for domain in &domains {
        println!("\n  {}", domain);

        match punycodec::to_ascii(domain) {
            Ok(ascii) => println!("    to_ascii   → {}", ascii),
            Err(e) => println!("    to_ascii   ✗ {}", e),
        }

        match punycodec::to_unicode(domain) {
            Ok(unicode) => println!("    to_unicode → {}", unicode),
            Err(e) => println!("    to_unicode ✗ {}", e),
        }
    }
}
