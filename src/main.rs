#[tokio::main]
async fn main() {
    if let Err(err) = orgpulse_lib::run(std::env::args().skip(1).collect()).await {
        eprintln!("orgpulse: {err}");
        std::process::exit(1);
    }
}
