use crate::{
    api::{self, invoices, timestamps, workers},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    cfg.service(web::resource("/").route(web::get().to(api::index)));

    // Badge reader endpoints
    cfg.service(
        web::resource("/timestamps")
            .wrap(build_limiter(config.rate_scan_per_min))
            .route(web::post().to(timestamps::record_scan)),
    );
    cfg.service(web::resource("/check_uid/{uid}").route(web::get().to(workers::check_uid)));

    // Browser forms
    cfg.service(
        web::resource("/register")
            .wrap(build_limiter(config.rate_form_per_min))
            .route(web::get().to(workers::register_form))
            .route(web::post().to(workers::register_worker)),
    );
    cfg.service(
        web::resource("/invoice")
            .wrap(build_limiter(config.rate_form_per_min))
            .route(web::get().to(invoices::invoice_form))
            .route(web::post().to(invoices::generate_invoice)),
    );
}
