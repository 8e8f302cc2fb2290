use cfg_aliases::cfg_aliases;

fn main() {
    // The script doesn't depend on our code.
    println!("cargo:rerun-if-changed=build.rs");

    // Setup cfg aliases.
    cfg_aliases! {
        // Platforms.
        windows_platform: { target_os = "windows" },
        headless_platform: { not(target_os = "windows") },
    }
}
