use std::{env, io};

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};

use band_gen_core::model::settings::GenerationSettings;
use band_gen_core::{GenerationError, Generator};
use log::{error, info};
use serde::Deserialize;

/// Upper bound on names per request.
const MAX_COUNT: usize = 100;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	count: Option<usize>,
	seed: Option<u64>,
	max_tokens: Option<usize>,
}

impl GenerateParams {
	/// Converts query parameters into validated generation settings.
	fn settings(&self) -> Result<GenerationSettings, GenerationError> {
		let mut settings = GenerationSettings::default();
		if let Some(count) = self.count {
			if count > MAX_COUNT {
				return Err(GenerationError::InvalidSettings(format!("count must be at most {MAX_COUNT}")));
			}
			settings.set_count(count)?;
		}
		if let Some(max_tokens) = self.max_tokens {
			settings.set_max_tokens(max_tokens)?;
		}
		settings.seed = self.seed;
		Ok(settings)
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Returns a JSON array of generated names.
#[get("/v1/generate")]
async fn get_generated(generator: web::Data<Generator>, query: web::Query<GenerateParams>) -> impl Responder {
	let settings = match query.settings() {
		Ok(s) => s,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
	};

	match generator.generate_batch(&settings) {
		Ok(names) => HttpResponse::Ok().json(names),
		Err(e) => {
			error!("generation failed: {e}");
			HttpResponse::InternalServerError().body(e.to_string())
		}
	}
}

/// HTTP GET endpoint `/v1/grammar`
///
/// Dumps the transition table so the weights can be audited.
#[get("/v1/grammar")]
async fn get_grammar(generator: web::Data<Generator>) -> impl Responder {
	HttpResponse::Ok().json(generator.table())
}

/// Builds the generator from `BAND_GEN_BANKS` if set, the embedded banks otherwise.
fn load_generator() -> Result<Generator, GenerationError> {
	match env::var("BAND_GEN_BANKS") {
		Ok(path) => {
			info!("loading word banks from {path}");
			Generator::from_file(path)
		}
		Err(_) => Generator::embedded(),
	}
}

/// Main entry point for the server.
///
/// Builds and self-checks the generator, then shares it read-only across
/// Actix-web workers. No lock is needed: every request brings its own
/// random source.
///
/// # Notes
/// - Binds to `BAND_GEN_ADDR`, default 127.0.0.1:5000.
/// - Log level comes from `RUST_LOG`, default `info`.
#[actix_web::main]
async fn main() -> io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let generator = web::Data::new(load_generator().map_err(io::Error::other)?);
	let address = env::var("BAND_GEN_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_owned());
	info!("listening on {address}");

	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET"]))
			.app_data(generator.clone())
			.service(get_generated)
			.service(get_grammar)
	})
		.bind(address)?
		.run()
		.await
}
