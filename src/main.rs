use crate::provider::ListingsProvider;
use crate::responses::html_error_response;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod domain;
mod errors;
mod geo;
mod provider;
mod responses;
mod router;
mod templates;
mod widgets;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Build the client for the upstream that owns the listing records.
    // We only ever read from it.
    let api_base =
        std::env::var("LISTINGS_API_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());

    let provider = match ListingsProvider::new(&api_base) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("❌ Listings provider setup failed: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 3️⃣ Serve requests, passing the provider handle into the closure
    let result = server.serve(move |req, _info| match handle(req, &provider) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
