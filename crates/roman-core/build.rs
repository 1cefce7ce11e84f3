// Fail the build if the embedded defaults cannot be parsed, instead of
// panicking on the first `settings()` call at runtime.
const DEFAULTS: &str = "src/default_settings.toml";

fn main() {
    println!("cargo:rerun-if-changed={DEFAULTS}");
    if let Err(e) = include_str!("src/default_settings.toml").parse::<toml::Table>() {
        panic!("{DEFAULTS} is not valid TOML: {e}");
    }
}
