use std::env;
use std::process::Command;

fn short_commit() -> Option<String> {
    let out = Command::new("git").args(["rev-parse", "--short=7", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let hash = String::from_utf8(out.stdout).ok()?;
    Some(hash.trim().to_owned()).filter(|h| !h.is_empty())
}

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");

    let commit = short_commit().unwrap_or_else(|| "unknown".into());
    let target = env::var("TARGET").unwrap_or_else(|_| "unknown".into());
    for (key, value) in [("GIT_COMMIT_HASH", commit), ("TARGET", target)] {
        println!("cargo:rustc-env={}={}", key, value);
    }
}
