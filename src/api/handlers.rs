use actix_web::{web, HttpResponse};

use crate::domain::customer::{
    CustomerEditRequest, CustomerError, CustomerId, CustomerRegistrationRequest, CustomerService,
};

pub async fn list_customers(
    service: web::Data<CustomerService>,
) -> Result<HttpResponse, CustomerError> {
    let customers = service.list_all().await?;
    Ok(HttpResponse::Ok().json(customers))
}

pub async fn get_customer(
    service: web::Data<CustomerService>,
    id: web::Path<CustomerId>,
) -> Result<HttpResponse, CustomerError> {
    let customer = service.get(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(customer))
}

pub async fn register_customer(
    service: web::Data<CustomerService>,
    request: web::Json<CustomerRegistrationRequest>,
) -> Result<HttpResponse, CustomerError> {
    let customer = service.register(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(customer))
}

pub async fn delete_customer(
    service: web::Data<CustomerService>,
    id: web::Path<CustomerId>,
) -> Result<HttpResponse, CustomerError> {
    service.remove_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}

pub async fn update_customer(
    service: web::Data<CustomerService>,
    id: web::Path<CustomerId>,
    request: web::Json<CustomerEditRequest>,
) -> Result<HttpResponse, CustomerError> {
    let customer = service.apply_edit(id.into_inner(), request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(customer))
}

#[cfg(test)]
mod tests {
    use crate::api::{configure, CUSTOMERS_PATH};
    use crate::config::Backend;
    use crate::db::InMemoryCustomerDao;
    use crate::domain::customer::{Customer, CustomerService};
    use crate::metrics::Metrics;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::json;
    use std::sync::Arc;

    fn app_data(seeded: bool) -> (web::Data<CustomerService>, web::Data<Arc<Metrics>>) {
        let dao = if seeded {
            InMemoryCustomerDao::with_demo_data()
        } else {
            InMemoryCustomerDao::new()
        };
        let metrics = Arc::new(Metrics::new().unwrap());
        let service = CustomerService::new(Arc::new(dao)).with_metrics(metrics.clone());
        (web::Data::new(service), web::Data::new(metrics))
    }

    macro_rules! test_app {
        ($seeded:expr) => {{
            let (service, metrics) = app_data($seeded);
            test::init_service(
                App::new()
                    .app_data(service)
                    .app_data(metrics)
                    .app_data(web::Data::new(Backend::Memory))
                    .configure(configure),
            )
            .await
        }};
    }

    fn customer_uri(id: i32) -> String {
        format!("{}/{}", CUSTOMERS_PATH, id)
    }

    #[actix_web::test]
    async fn test_list_customers() {
        let app = test_app!(true);

        let req = test::TestRequest::get().uri(CUSTOMERS_PATH).to_request();
        let customers: Vec<Customer> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].name, "Alex");
    }

    #[actix_web::test]
    async fn test_get_missing_customer_returns_404() {
        let app = test_app!(true);

        let req = test::TestRequest::get().uri(&customer_uri(404)).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_register_duplicate_email_returns_409() {
        let app = test_app!(true);

        let req = test::TestRequest::post()
            .uri(CUSTOMERS_PATH)
            .set_json(json!({"name": "Alex Two", "email": "alex@gmail.com", "age": 30}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "DUPLICATE_EMAIL");
    }

    #[actix_web::test]
    async fn test_register_malformed_body_returns_400() {
        let app = test_app!(false);

        let req = test::TestRequest::post()
            .uri(CUSTOMERS_PATH)
            .set_json(json!({"name": "No Email"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_without_changes_returns_400() {
        let app = test_app!(true);

        let req = test::TestRequest::put()
            .uri(&customer_uri(1))
            .set_json(json!({"name": "Alex", "age": 25}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "NO_CHANGES");
    }

    #[actix_web::test]
    async fn test_update_to_taken_email_returns_409() {
        let app = test_app!(true);

        let req = test::TestRequest::put()
            .uri(&customer_uri(1))
            .set_json(json!({"email": "anakin@gmail.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_update_missing_customer_returns_404() {
        let app = test_app!(true);

        let req = test::TestRequest::put()
            .uri(&customer_uri(77))
            .set_json(json!({"name": "Nobody"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_delete_missing_customer_returns_404() {
        let app = test_app!(true);

        let req = test::TestRequest::delete().uri(&customer_uri(9)).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_health_and_metrics_endpoints() {
        let app = test_app!(true);

        let req = test::TestRequest::get().uri("/health").to_request();
        let health: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(health["status"], "healthy");
        assert_eq!(health["backend"], "memory");

        // Generate at least one sample before scraping
        let req = test::TestRequest::get().uri(CUSTOMERS_PATH).to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/metrics").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("customer_operations_total"));
    }

    #[actix_web::test]
    async fn test_customer_journey() {
        let app = test_app!(false);

        // Register
        let req = test::TestRequest::post()
            .uri(CUSTOMERS_PATH)
            .set_json(json!({"name": "Alice", "email": "alice@x.com", "age": 30}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        // Listed with an assigned id
        let req = test::TestRequest::get().uri(CUSTOMERS_PATH).to_request();
        let customers: Vec<Customer> = test::call_and_read_body_json(&app, req).await;
        let alice = customers
            .into_iter()
            .find(|c| c.email.as_str() == "alice@x.com")
            .unwrap();
        assert_eq!(alice.name, "Alice");
        assert_eq!(alice.age, 30);

        // Fetch by id
        let req = test::TestRequest::get().uri(&customer_uri(alice.id)).to_request();
        let fetched: Customer = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, alice);

        // Rename only
        let req = test::TestRequest::put()
            .uri(&customer_uri(alice.id))
            .set_json(json!({"name": "Alicia"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri(&customer_uri(alice.id)).to_request();
        let edited: Customer = test::call_and_read_body_json(&app, req).await;
        assert_eq!(edited.name, "Alicia");
        assert_eq!(edited.email.as_str(), "alice@x.com");
        assert_eq!(edited.age, 30);

        // Delete, then gone
        let req = test::TestRequest::delete().uri(&customer_uri(alice.id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri(&customer_uri(alice.id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
