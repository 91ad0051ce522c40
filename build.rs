fn main() {
    // Capture the build date; the footer shows it as the last-updated line
    let build_date = chrono::Utc::now().format("%Y-%m-%d");
    println!("cargo:rustc-env=BUILD_DATE={}", build_date);

    println!("cargo:rerun-if-changed=build.rs");
}
