//! Build script that embeds the version string as `FDMEP_VERSION`.

use std::process::Command;

fn main() {
    // Prefer FDMEP_VERSION env var if set (e.g., by the release workflow),
    // otherwise fall back to git describe for local development builds.
    if let Ok(version) = std::env::var("FDMEP_VERSION") {
        println!("cargo:rustc-env=FDMEP_VERSION={version}");
    } else if let Ok(output) = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        && output.status.success()
    {
        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !version.is_empty() {
            println!("cargo:rustc-env=FDMEP_VERSION={version}");
        }
    }

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");
    println!("cargo:rerun-if-env-changed=FDMEP_VERSION");
}
