mod common;

use anyhow::Result;
use chrono::Duration;
use common::{parse_datetime, test_service};
use rashod::application::summarize;
use rashod::bot::{NO_EXPENSES, handle_text};
use rashod::domain::{Category, Currency, ExpenseRecord, Period};

#[tokio::test]
async fn test_payout_day_after_single_payment() -> Result<()> {
    let service = test_service();
    let now = parse_datetime("2024-01-15 18:30");

    handle_text(&service, 1, "/payment fd 100 myr", None, now).await;
    let reply = handle_text(&service, 1, "/payout_day", None, now)
        .await
        .unwrap_or_default();

    assert_eq!(
        reply,
        "💰 Траты за период (day):\n- fd: 21.00 USD\n\nИтого: 21.00 USD"
    );
    Ok(())
}

#[tokio::test]
async fn test_payout_without_records_reports_nothing() -> Result<()> {
    let service = test_service();
    let now = parse_datetime("2024-01-15 18:30");

    for period in Period::ALL {
        let text = format!("/{}", period.command());
        let reply = handle_text(&service, 99, &text, None, now).await;
        assert_eq!(reply.as_deref(), Some(NO_EXPENSES), "{text}");
    }
    Ok(())
}

#[tokio::test]
async fn test_periods_select_their_windows() -> Result<()> {
    let service = test_service();
    let now = parse_datetime("2024-06-30 12:00");

    // One record just inside each window, amounts chosen so totals are distinct
    let cases = [
        (Duration::hours(12), "1"),
        (Duration::days(5), "10"),
        (Duration::days(20), "100"),
        (Duration::days(200), "1000"),
        (Duration::days(400), "10000"),
    ];
    for (age, amount) in cases {
        service
            .record_payment(1, &["els", amount, "myr"], now - age)
            .await?;
    }

    let totals: Vec<f64> = {
        let mut totals = Vec::new();
        for period in Period::ALL {
            let report = service.payout(1, period, now).await;
            totals.push(report.map_or(0.0, |r| r.total));
        }
        totals
    };

    let expected = [1.0, 11.0, 111.0, 1111.0].map(|myr| myr * 0.21);
    for (actual, expected) in totals.iter().zip(expected) {
        assert!((actual - expected).abs() < 1e-6, "{actual} != {expected}");
    }
    Ok(())
}

#[tokio::test]
async fn test_payout_all_stops_at_one_year() -> Result<()> {
    let service = test_service();
    let now = parse_datetime("2024-06-30 12:00");

    service
        .record_payment(1, &["hom", "500", "thb"], now - Duration::days(366))
        .await?;

    assert!(service.payout(1, Period::All, now).await.is_none());
    Ok(())
}

#[tokio::test]
async fn test_report_lists_categories_in_first_seen_order() -> Result<()> {
    let service = test_service();
    let now = parse_datetime("2024-03-10 09:00");

    for (category, amount, currency) in [
        ("trns", "1000", "thb"),
        ("fd", "100", "myr"),
        ("trns", "100000", "vnd"),
        ("drnk", "50", "myr"),
    ] {
        service
            .record_payment(1, &[category, amount, currency], now - Duration::minutes(5))
            .await?;
    }

    let reply = handle_text(&service, 1, "/payout_week", None, now)
        .await
        .unwrap_or_default();

    assert_eq!(
        reply,
        "💰 Траты за период (week):\n\
         - trns: 31.30 USD\n\
         - fd: 21.00 USD\n\
         - drnk: 10.50 USD\n\
         \n\
         Итого: 62.80 USD"
    );
    Ok(())
}

#[tokio::test]
async fn test_report_counts_and_bounds() -> Result<()> {
    let service = test_service();
    let now = parse_datetime("2024-03-10 09:00");

    service.record_payment(4, &["med", "10", "myr"], now).await?;
    service.record_payment(4, &["med", "20", "myr"], now).await?;

    let report = service.payout(4, Period::Month, now).await.unwrap();

    assert_eq!(report.period, Period::Month);
    assert_eq!(report.until, now);
    assert_eq!(report.since, now - Duration::days(30));
    assert_eq!(report.categories.len(), 1);
    assert_eq!(report.categories[0].category, Category::Med);
    assert_eq!(report.categories[0].count, 2);
    assert!((report.total - 6.3).abs() < 1e-9);

    let json = serde_json::to_value(&report)?;
    assert_eq!(json["period"], "month");
    assert_eq!(json["categories"][0]["category"], "med");
    Ok(())
}

#[test]
fn test_record_contributes_amount_times_rate() {
    let at = parse_datetime("2024-01-01 00:00");

    for currency in Currency::ALL {
        for amount in [1.0, 37.5, 12_345.0] {
            let record = ExpenseRecord::new(amount, currency, Category::Dope, at);
            let summary = summarize(&[record]);
            let expected = amount * currency.rate();

            assert_eq!(summary.total, expected);
            assert_eq!(summary.category_total(Category::Dope), Some(expected));
        }
    }
}
