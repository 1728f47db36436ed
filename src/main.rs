use fake_news_detector::app;
use fake_news_detector::error::DetectorError;

#[tokio::main]
async fn main() -> Result<(), DetectorError> {
    app::run().await
}
