fn main() {
    // Stamp the binary with its build date
    let build_date = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC");
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);
}
