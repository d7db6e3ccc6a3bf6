//! End-to-end counter flow against an in-memory store:
//! session → checkout → history → report → receipt.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use royal_core::{
    CartSession, MenuItem, Money, NewMenuItem, OrderValidationError, PaymentMethod, ServiceMode,
    TOP_ITEMS_LIMIT,
};
use royal_db::{checkout, CheckoutError, Database, DbConfig, DbError, FixedClock};

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 4, 1)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

async fn seeded_db() -> Database {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    db.menu().seed_sample_menu().await.unwrap();
    db
}

async fn dish(db: &Database, name: &str) -> MenuItem {
    db.menu()
        .list_available()
        .await
        .unwrap()
        .into_iter()
        .find(|item| item.name == name)
        .unwrap()
}

#[tokio::test]
async fn test_order_round_trip() {
    let db = seeded_db().await;
    let paneer = dish(&db, "Paneer Tikka").await;
    let naan = dish(&db, "Butter Naan").await;

    let mut session = CartSession::new(ServiceMode::DineIn);
    session.add_item(&paneer, 1).unwrap();
    session.add_item(&naan, 1).unwrap();
    session.add_item(&naan, 1).unwrap();
    session.set_customer(Some("Asha"), Some("98450 00000"), Some("7"));
    session.set_discount_percent(10.0);

    let done = checkout(&db, &FixedClock(at(19, 30, 5)), &mut session, PaymentMethod::Upi)
        .await
        .unwrap();

    // 180 + 2 × 60 = 300.00; 5% tax 15.00; 10% off 30.00
    assert_eq!(done.totals.subtotal, Money::from_cents(30000));
    assert_eq!(done.totals.tax_amount, Money::from_cents(1500));
    assert_eq!(done.totals.discount_amount, Money::from_cents(3000));
    assert_eq!(done.totals.grand_total, Money::from_cents(28500));
    assert_eq!(done.header.order_number, "ORD20260401193005");
    assert!(session.is_empty());

    // History
    let day = at(0, 0, 0).date();
    let history = db.orders().list(Some(day), Some(day)).await.unwrap();
    assert_eq!(history.len(), 1);
    let saved = &history[0];
    assert_eq!(saved.id, done.id);
    assert_eq!(saved.table_number.as_deref(), Some("7"));
    assert_eq!(saved.payment_method, PaymentMethod::Upi);
    assert_eq!(saved.totals(), done.totals);
    assert_eq!(saved.items, done.lines);

    let records = db.orders().items_for(done.id).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].item_name, "Butter Naan");
    assert_eq!(records[1].quantity, 2);
    assert_eq!(records[1].total_price, Money::from_cents(12000));

    // Report
    let summary = db.orders().sales_summary(day, day).await.unwrap();
    assert_eq!(summary.total_orders(), 1);
    assert_eq!(summary.total_revenue(), Money::from_cents(28500));
    assert_eq!(summary.top_items[0].item_name, "Butter Naan");
    assert_eq!(summary.payment_breakdown[0].payment_method, PaymentMethod::Upi);

    // Receipt
    let grand_line = done
        .receipt
        .lines()
        .find(|l| l.starts_with("GRAND TOTAL:"))
        .unwrap();
    assert!(grand_line.ends_with(&done.totals.grand_total.to_decimal_string()));
    assert!(done.receipt.contains("Table: 7"));
}

#[tokio::test]
async fn test_colliding_order_number_moves_to_next_second() {
    let db = seeded_db().await;
    let chai = dish(&db, "Masala Chai").await;
    let clock = FixedClock(at(12, 0, 0));

    let mut first = CartSession::new(ServiceMode::Takeaway);
    first.add_item(&chai, 1).unwrap();
    let a = checkout(&db, &clock, &mut first, PaymentMethod::Cash).await.unwrap();

    let mut second = CartSession::new(ServiceMode::Takeaway);
    second.add_item(&chai, 2).unwrap();
    let b = checkout(&db, &clock, &mut second, PaymentMethod::Cash).await.unwrap();

    assert_eq!(a.header.order_number, "ORD20260401120000");
    assert_eq!(b.header.order_number, "ORD20260401120001");
    assert_eq!(b.header.order_date, at(12, 0, 0) + Duration::seconds(1));
    assert_eq!(db.orders().count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_failed_save_keeps_the_cart() {
    let db = seeded_db().await;
    let chai = dish(&db, "Masala Chai").await;

    // Occupy 12:00:00 and 12:00:01 so the single retry also collides.
    for second in [0, 1] {
        let mut s = CartSession::new(ServiceMode::Takeaway);
        s.add_item(&chai, 1).unwrap();
        checkout(&db, &FixedClock(at(12, 0, second)), &mut s, PaymentMethod::Cash)
            .await
            .unwrap();
    }

    let mut session = CartSession::new(ServiceMode::Takeaway);
    session.add_item(&chai, 3).unwrap();
    session.set_discount_percent(5.0);
    let before = session.clone();

    let err = checkout(&db, &FixedClock(at(12, 0, 0)), &mut session, PaymentMethod::Card)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CheckoutError::Persistence(DbError::UniqueViolation { .. })
    ));
    assert_eq!(session.id, before.id);
    assert_eq!(session.lines, before.lines);
    assert_eq!(session.discount_percent, 5.0);
    assert_eq!(db.orders().count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_invalid_order_saves_nothing() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let id = db
        .menu()
        .add(&NewMenuItem::new("Water", "Beverages", Money::zero()))
        .await
        .unwrap();
    let water = db.menu().get_by_id(id).await.unwrap().unwrap();

    let mut session = CartSession::new(ServiceMode::Takeaway);
    session.add_item(&water, 1).unwrap();

    let err = checkout(&db, &FixedClock(at(9, 0, 0)), &mut session, PaymentMethod::Cash)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CheckoutError::Validation(OrderValidationError::InvalidPrice(ref name)) if name == "Water"
    ));
    assert_eq!(session.item_count(), 1);
    assert_eq!(db.orders().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_top_items_are_capped_and_sorted() {
    let db = seeded_db().await;
    let menu = db.menu().list_available().await.unwrap();
    assert!(menu.len() > TOP_ITEMS_LIMIT);

    for (i, item) in menu.iter().enumerate() {
        let mut session = CartSession::new(ServiceMode::Takeaway);
        session.add_item(item, (i % 5) as i64 + 1).unwrap();
        checkout(
            &db,
            &FixedClock(at(13, 0, 0) + Duration::seconds(i as i64 * 10)),
            &mut session,
            PaymentMethod::Card,
        )
        .await
        .unwrap();
    }

    let day = at(0, 0, 0).date();
    let summary = db.orders().sales_summary(day, day).await.unwrap();

    assert_eq!(summary.top_items.len(), TOP_ITEMS_LIMIT);
    assert!(summary
        .top_items
        .windows(2)
        .all(|w| w[0].total_quantity >= w[1].total_quantity));
    assert_eq!(summary.total_orders(), menu.len() as i64);
}
