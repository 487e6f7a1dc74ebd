mod common;

use axum::http::StatusCode;
use common::{tenant_body, TestApp};

#[tokio::test]
async fn test_one_payment_per_tenant() {
    let app = TestApp::new();
    let admin = app.admin_token();
    for room in ["A1", "A2", "B1"] {
        let (status, _) = app.send("POST", "/api/real-tenant", Some(&admin), Some(tenant_body(room, "secret1"))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = app.send("GET", "/api/rent", Some(&admin), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 3);
    let payments = body["payments"].as_array().unwrap();
    assert_eq!(payments.len(), 3);

    let tenants = app.tenants.tenants.lock().unwrap().clone();
    for tenant in &tenants {
        let id = format!("payment_{}", tenant.id.unwrap().to_hex());
        let payment = payments.iter().find(|p| p["_id"] == id.as_str()).expect("payment for tenant");
        assert_eq!(payment["roomNumber"], tenant.room_number.as_str());
        assert_eq!(payment["tenantName"], tenant.name.as_str());
        assert_eq!(payment["amount"], 8500.0);
        assert!(payment["dueDate"].is_string());
        match payment["status"].as_str().unwrap() {
            "overdue" => {
                assert_eq!(payment["lateFee"], 500.0);
                assert!(payment["paidDate"].is_null());
            }
            "paid" => {
                assert_eq!(payment["lateFee"], 0.0);
                assert!(payment["paidDate"].is_string());
            }
            "pending" => {
                assert_eq!(payment["lateFee"], 0.0);
                assert!(payment["paidDate"].is_null());
            }
            other => panic!("unexpected status {}", other),
        }
        assert!(["M-Pesa", "Bank", "Cash"].contains(&payment["paymentMethod"].as_str().unwrap()));
    }
}

#[tokio::test]
async fn test_no_tenants_no_payments() {
    let app = TestApp::new();

    let (status, body) = app.send("GET", "/api/rent", Some(&app.admin_token()), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert!(body["payments"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_rent_admin_only() {
    let app = TestApp::new();

    let (status, _) = app.send("GET", "/api/rent", Some(&app.tenant_token("A1")), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.send("GET", "/api/rent", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
