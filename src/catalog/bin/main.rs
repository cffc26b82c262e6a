include!("../../lib.rs");

use std::io::BufRead;
use crate::catalog::controller::CatalogController;
use crate::core::controller::AppState;
use crate::core::repository::RepositoryStore;
use crate::utils::logs::setup_tracing;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    setup_tracing();

    let controller = CatalogController::new(AppState::new("main", RepositoryStore::InMemory));
    println!("{}", controller.usage());

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        match controller.dispatch(line?.as_str()).await {
            Some(output) => println!("{}", output),
            None => break,
        }
    }
    Ok(())
}
