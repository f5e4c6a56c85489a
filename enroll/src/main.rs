use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL of a running review board server.
    #[arg(default_value = "http://localhost:1111")]
    server_url: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    enroll::enroll_candidates(&args.server_url).await;
}
