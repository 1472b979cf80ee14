use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=CAREERS_APPLY_URL");
    println!("cargo:rerun-if-changed=catalogs/jobs.json");
    println!("cargo:rerun-if-changed=schema/job_catalog.schema.json");

    let hint = env::var("CAREERS_APPLY_URL").ok();

    if let Some(raw_hint) = hint {
        let trimmed = raw_hint.trim();
        if !trimmed.is_empty() {
            println!("cargo:rustc-env=CAREERS_APPLY_URL={trimmed}");
        }
    }
}
