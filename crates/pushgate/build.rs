use std::process::Command;

use chrono::Utc;

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/refs/");

    let version = env!("CARGO_PKG_VERSION");
    let build_date = Utc::now().format("%Y-%m-%d").to_string();

    // Released builds report the bare version; anything else carries the commit.
    let version_string = match git(&["rev-parse", "--short", "HEAD"]) {
        Some(hash) if !is_tagged_release(version) => format!("{version}+{hash}"),
        _ => version.to_owned(),
    };

    println!("cargo:rustc-env=PUSHGATE_VERSION={version_string}");
    println!("cargo:rustc-env=PUSHGATE_BUILD_DATE={build_date}");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_owned())
}

fn is_tagged_release(version: &str) -> bool {
    let expected_tag = format!("pushgate@v{version}");
    git(&["tag", "--points-at", "HEAD"])
        .is_some_and(|tags| tags.lines().any(|line| line.trim() == expected_tag))
}
