// src/web/routes.rs

use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called in `main.rs` to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1")
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Authentication Routes
      .service(
        web::scope("/auth")
          .route(
            "/signin",
            web::post().to(crate::web::handlers::auth_handlers::signin_handler),
          )
          .route(
            "/signout",
            web::post().to(crate::web::handlers::auth_handlers::signout_handler),
          )
          .route("/me", web::get().to(crate::web::handlers::auth_handlers::me_handler)),
      )
      // Customer Order Routes
      .service(
        web::scope("/orders")
          .route(
            "",
            web::post().to(crate::web::handlers::order_handlers::create_order_handler),
          )
          .route(
            "",
            web::get().to(crate::web::handlers::order_handlers::list_my_orders_handler),
          )
          // Registered before `/{order_id}` so "latest" is not parsed as an id.
          .route(
            "/latest",
            web::get().to(crate::web::handlers::order_handlers::latest_order_handler),
          )
          .route(
            "/{order_id}",
            web::get().to(crate::web::handlers::order_handlers::get_order_handler),
          ),
      )
      // Manager Review Routes
      .service(
        web::scope("/manager")
          .route(
            "/orders",
            web::get().to(crate::web::handlers::manager_handlers::list_all_orders_handler),
          )
          .route(
            "/orders/pending",
            web::get().to(crate::web::handlers::manager_handlers::list_pending_orders_handler),
          )
          .route(
            "/orders/{order_id}/review",
            web::post().to(crate::web::handlers::manager_handlers::review_order_handler),
          ),
      ),
  );

  // Public blob surface, outside the API scope: these URLs are handed out
  // verbatim as design-file public URLs.
  cfg.route(
    "/files/designs/{file_name}",
    web::get().to(crate::web::handlers::file_handlers::get_design_file_handler),
  );
}
