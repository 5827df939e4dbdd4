use wallet_display_core::{writable_lists, CoreConfig};

fn main() {
    wallet_display_core::init();

    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let lists: Vec<&str> = writable_lists(config.default_network)
        .iter()
        .map(|list| list.name)
        .collect();

    println!("Wallet Display Core Configuration:\n");
    println!("  Version: {}", wallet_display_core::VERSION);
    println!(
        "  Default Network: {} (chain id {})",
        config.default_network.name(),
        config.default_network.chain_id()
    );
    println!("  Address Prefix Length: {}", config.address_prefix_len);
    println!("  Address Suffix Length: {}", config.address_suffix_len);
    println!("  Writable Lists: {}", lists.join(", "));
}
