use std::env;

// This build file selects the cluster feature that decides the program id
fn main() {
    let cluster_feature_set = ["LOCALNET", "DEVNET", "MAINNET", "STAGING"]
        .iter()
        .any(|feature| env::var(format!("CARGO_FEATURE_{feature}")).is_ok());
    if cluster_feature_set {
        // A cluster feature has been manually set, just ignore env variables.
    } else {
        let cluster = env::var("CLUSTER").unwrap_or_else(|_| "mainnet".to_string());

        // Rerun if CLUSTER is changed
        println!("cargo:rerun-if-env-changed=CLUSTER");
        // Set feature according to current cluster
        match cluster.as_str() {
            "staging" => println!("cargo:rustc-cfg=feature=\"staging\""),
            "localnet" => println!("cargo:rustc-cfg=feature=\"localnet\""),
            "devnet" => println!("cargo:rustc-cfg=feature=\"devnet\""),
            _ => println!("cargo:rustc-cfg=feature=\"mainnet\""), // default to mainnet configuration
        }
    }
}
