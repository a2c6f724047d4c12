fn main() {
    // Validate the embedded kana table at compile time.
    validate_toml(
        "src/default_kana.toml",
        include_str!("src/default_kana.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
