/// Expose the compilation target triple as an environment variable at build time.
///
/// The `version` command prints it via `env!("TARGET")`.
fn main() {
    println!(
        "cargo:rustc-env=TARGET={}",
        std::env::var("TARGET").unwrap()
    );
}
