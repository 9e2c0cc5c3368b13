use crate::db::{connect_with_config, DatabaseConfig};
use crate::pizza;
use sea_orm::{DatabaseConnection, EntityTrait};
use anyhow::Result;
use migration::MigratorTrait;

/// Setup a private in-memory database with migrations applied
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn test_pizza_crud() -> Result<()> {
    let db = setup_test_db().await?;

    // Create
    let created = pizza::create(&db, "Margherita", None).await?;
    assert!(created.id > 0);
    assert_eq!(created.name, "Margherita");
    assert_eq!(created.description, None);

    // Read
    let found = pizza::find(&db, created.id).await?;
    assert_eq!(found.as_ref(), Some(&created));

    // Update name only keeps the description
    let with_desc = pizza::create(&db, "Diavola", Some("spicy salami")).await?;
    let updated = pizza::update(&db, with_desc.id, "Diavola Piccante", None).await?;
    let updated = updated.expect("row exists");
    assert_eq!(updated.id, with_desc.id);
    assert_eq!(updated.name, "Diavola Piccante");
    assert_eq!(updated.description.as_deref(), Some("spicy salami"));

    // Update with description overwrites it
    let updated = pizza::update(&db, with_desc.id, "Diavola", Some("hot")).await?.expect("row exists");
    assert_eq!(updated.description.as_deref(), Some("hot"));

    // Delete
    assert!(pizza::delete(&db, created.id).await?);
    assert!(pizza::find(&db, created.id).await?.is_none());
    assert!(!pizza::delete(&db, created.id).await?);

    Ok(())
}

#[tokio::test]
async fn test_update_missing_row_is_none() -> Result<()> {
    let db = setup_test_db().await?;
    pizza::create(&db, "Hawaiian", None).await?;

    assert!(pizza::update(&db, 999, "Ghost", None).await?.is_none());

    let all = pizza::Entity::find().all(&db).await?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Hawaiian");
    Ok(())
}

#[tokio::test]
async fn test_list_orders_by_id_and_windows() -> Result<()> {
    let db = setup_test_db().await?;
    for name in ["A", "B", "C", "D"] {
        pizza::create(&db, name, None).await?;
    }

    let all = pizza::list(&db, 0, None).await?;
    let names: Vec<_> = all.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C", "D"]);

    let page = pizza::list(&db, 2, Some(2)).await?;
    let names: Vec<_> = page.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["C", "D"]);
    Ok(())
}

#[tokio::test]
async fn test_migration_is_idempotent() -> Result<()> {
    let db = setup_test_db().await?;
    pizza::create(&db, "Quattro Formaggi", None).await?;
    migration::Migrator::up(&db, None).await?;
    assert_eq!(pizza::list(&db, 0, None).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_in_memory_table_survives_recycle_interval() -> Result<()> {
    // Short recycle timers would drop the only connection, and the table with it.
    let mut cfg = DatabaseConfig::in_memory();
    cfg.idle_timeout = std::time::Duration::from_secs(1);
    cfg.max_lifetime = std::time::Duration::from_secs(1);
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    let created = pizza::create(&db, "Margherita", None).await?;

    tokio::time::sleep(std::time::Duration::from_millis(2500)).await;

    let all = pizza::list(&db, 0, None).await?;
    assert_eq!(all, vec![created]);
    Ok(())
}
