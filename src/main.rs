#[tokio::main]
async fn main() {
    if let Err(e) = mongo_index_audit::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
