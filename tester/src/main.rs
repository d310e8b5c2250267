//! Quiz Quest API tester entry point
//!
//! 引数・環境変数は受け付けない。検査の成否に関わらず終了コードは0。

use quiz_api_tester::{logging, TesterConfig};
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = logging::init() {
        eprintln!("Error: {}", e);
    }

    if let Err(e) = quiz_api_tester::run(&TesterConfig::default(), std::io::stdout()).await {
        error!("Test run aborted: {}", e);
    }
}
