//! Dual-Tree Bimap - demo binary
//!
//! Builds a small bimap, walks it from both sides and shows the
//! default-eviction rule. Set `RUST_LOG=trace` to see every link/unlink.

use env_logger::Env;
use log::info;

use dual_tree_bimap::Bimap;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut ports: Bimap<&str, u16> = Bimap::with_capacity(8);
    for (service, port) in [("https", 443), ("ssh", 22), ("http", 80), ("dns", 53)] {
        ports.insert(service, port);
    }

    if ports.insert("www", 80).is_end() {
        info!("rejected (www, 80): port 80 is taken");
    }

    info!("by service:");
    for (service, port) in ports.iter_left() {
        info!("  {service:<6} -> {port}");
    }

    info!("by port:");
    for (port, service) in ports.iter_right() {
        info!("  {port:<6} -> {service}");
    }

    let first = ports.begin_right();
    if let Some((service, port)) = ports.pair(first) {
        info!("lowest port {port} belongs to {service}");
    }

    match ports.at_left(&"smtp") {
        Ok(port) => info!("smtp -> {port}"),
        Err(err) => info!("smtp: {err}"),
    }

    let mut scores: Bimap<String, u32> = Bimap::new();
    scores.insert("old".to_string(), 0);
    let fresh = *scores.at_left_or_default("new".to_string());
    info!(
        "at_left_or_default(new) = {fresh}; old still present: {}",
        scores.contains_left(&"old".to_string())
    );
}
