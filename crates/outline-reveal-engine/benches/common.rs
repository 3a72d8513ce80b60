// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_slide(items: usize) -> String {
    let mut content = String::from("* Slide\n#+TITLE: Benchmark\n\nSome opening words.\n\n");

    for i in 0..items {
        content.push_str(&format!("- Point {i}\n"));
        content.push_str("  Supporting detail for this point, long enough to wrap.\n");
        content.push_str(&format!("  - Sub point {i}.a\n"));
        if i % 4 == 3 {
            content.push_str("  [[file:img/diagram.png][diagram]]\n");
        }
        if i % 5 == 4 {
            content.push_str("# pause\nAn aside between points.\n");
        }
    }

    content
}

#[allow(dead_code)]
pub fn generate_talk(slides: usize, items: usize) -> String {
    (0..slides).map(|_| generate_slide(items)).collect()
}
