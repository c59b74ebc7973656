use std::process::Command;

/// `git describe` output (tag or short SHA, `-dirty` when the tree has edits), if git is around.
fn describe() -> Option<String> {
    let out = Command::new("git")
        .args(["describe", "--always", "--dirty"])
        .output()
        .ok()?;
    if !out.status.success() {
        return None;
    }
    let desc = String::from_utf8(out.stdout).ok()?;
    let desc = desc.trim();
    (!desc.is_empty()).then(|| desc.to_string())
}

fn main() {
    let describe = describe().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=ROLLE_BUILD_SHA={}", describe);
    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=../.git/index");
}
