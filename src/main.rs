#[tokio::main]
async fn main() {
    bookit_backend::run().await;
}
