use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    caption_splitter::app::main().await
}
