//! Runs against a live MongoDB (`MONGO_URI`); ignored by default.
//! `cargo test -- --ignored` after starting a local server.

use dotenv::dotenv;
use rentals_backend::config::MongoConfig;
use rentals_backend::model::room::{Room, RoomStatus};
use rentals_backend::model::tenant::Tenant;
use rentals_backend::model::update::Update;
use rentals_backend::model::user::User;
use rentals_backend::repository::mongo;
use rentals_backend::repository::repository_error::RepositoryError;
use rentals_backend::repository::room_repo::{MongoRoomRepository, RoomRepository};
use rentals_backend::repository::tenant_repo::{MongoTenantRepository, TenantRepository};
use rentals_backend::repository::update_repo::{MongoUpdateRepository, UpdateRepository};
use rentals_backend::repository::user_repo::{MongoUserRepository, UserRepository};

async fn test_db() -> mongodb::Database {
    let _ = dotenv();
    let mut config = MongoConfig::from_env().unwrap_or_default();
    config.database = format!("rentals_test_{}", bson::oid::ObjectId::new().to_hex());
    mongo::database(&config).await.expect("mongo database")
}

fn unique_room() -> String {
    format!("T-{}", &bson::oid::ObjectId::new().to_hex()[16..])
}

#[tokio::test]
#[ignore]
async fn test_user_unique_room_number() {
    let db = test_db().await;
    let repo = MongoUserRepository::new(&db);
    repo.ensure_indexes().await.unwrap();
    let room = unique_room();

    let user = repo.insert(User::tenant(room.clone(), "hash".to_string())).await.unwrap();
    let duplicate = repo.insert(User::tenant(room.clone(), "hash".to_string())).await;
    assert!(matches!(duplicate, Err(RepositoryError::AlreadyExists(_))));

    // Admins have no room number; the sparse index must not clash on them.
    repo.insert(User::admin(format!("admin-{}", room), "hash".to_string())).await.unwrap();
    repo.insert(User::admin(format!("admin2-{}", room), "hash".to_string())).await.unwrap();

    let found = repo.find_by_room_number(&room).await.unwrap().unwrap();
    assert_eq!(found.id, user.id);
    repo.delete(user.id.unwrap()).await.unwrap();
    assert!(repo.find_by_room_number(&room).await.unwrap().is_none());
    db.drop(None).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_tenant_roundtrip_and_duplicate() {
    let db = test_db().await;
    let repo = MongoTenantRepository::new(&db);
    repo.ensure_indexes().await.unwrap();
    let room = unique_room();
    let tenant = Tenant {
        id: None,
        name: "Jane".to_string(),
        email: None,
        phone: None,
        room_number: room.clone(),
        rent_amount: 7500.0,
        move_in_date: "2024-05-01".to_string(),
        gender: None,
        last_payment: None,
        created_at: None,
        updated_at: None,
    };

    repo.insert(tenant.clone()).await.unwrap();
    assert!(matches!(repo.insert(tenant).await, Err(RepositoryError::AlreadyExists(_))));
    assert_eq!(repo.find_by_room_number(&room).await.unwrap().unwrap().rent_amount, 7500.0);
    assert_eq!(repo.list().await.unwrap().len(), 1);
    db.drop(None).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_updates_list_all() {
    let db = test_db().await;
    let repo = MongoUpdateRepository::new(&db);
    for title in ["first", "second", "third"] {
        repo.insert(Update {
            id: None,
            title: title.to_string(),
            description: "details".to_string(),
            created_at: None,
            updated_at: None,
        })
        .await
        .unwrap();
    }

    let mut titles: Vec<String> = repo.list_all().await.unwrap().into_iter().map(|u| u.title).collect();
    titles.sort();
    assert_eq!(titles, vec!["first", "second", "third"]);
    db.drop(None).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_room_status_update() {
    let db = test_db().await;
    let repo = MongoRoomRepository::new(&db);
    repo.ensure_indexes().await.unwrap();
    let room = repo
        .insert(Room {
            id: None,
            room_number: unique_room(),
            title: "Bedsitter".to_string(),
            description: String::new(),
            price: 6000.0,
            features: vec![],
            status: RoomStatus::Vacant,
            created_at: None,
            updated_at: None,
        })
        .await
        .unwrap();

    let updated = repo.update_status(room.id.unwrap(), RoomStatus::Occupied).await.unwrap();
    assert_eq!(updated.status, RoomStatus::Occupied);
    assert_eq!(repo.list(Some(RoomStatus::Vacant)).await.unwrap().len(), 0);
    assert!(matches!(
        repo.get_by_id(bson::oid::ObjectId::new()).await,
        Err(RepositoryError::NotFound(_))
    ));
    db.drop(None).await.unwrap();
}
