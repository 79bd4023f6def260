fn main() {
    // Validate the embedded symbol table at compile time.
    validate_toml(
        "src/table/default_symbols.toml",
        include_str!("src/table/default_symbols.toml"),
    );
    println!("cargo:rerun-if-changed=src/table/default_symbols.toml");
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
