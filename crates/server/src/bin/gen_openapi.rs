//! Print the callback API's OpenAPI document as JSON.

use server::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() {
    match ApiDoc::openapi().to_pretty_json() {
        Ok(spec) => println!("{spec}"),
        Err(e) => {
            eprintln!("Failed to serialize OpenAPI spec to JSON: {e}");
            std::process::exit(1);
        }
    }
}
