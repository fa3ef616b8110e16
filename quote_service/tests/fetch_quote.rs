use std::sync::Arc;
use std::time::Duration;

use quote_common::Ticker;
use quote_service::{
    FixedRandom, Latency, QuoteError, QuoteService, ScriptedRandom, SeededRandom, TickerStore,
};
use strum::IntoEnumIterator;
use tokio::time::Instant;

fn fixed_service(draw: f64) -> QuoteService {
    QuoteService::new(TickerStore::seeded(), FixedRandom(draw), Latency::None)
}

fn seeded_service(seed: u64) -> QuoteService {
    QuoteService::new(
        TickerStore::seeded(),
        SeededRandom::with_seed(seed),
        Latency::None,
    )
}

#[tokio::test]
async fn every_recognized_symbol_resolves_in_any_casing() {
    let service = seeded_service(1);
    for ticker in Ticker::iter() {
        let upper = ticker.to_string();
        for input in [upper.clone(), upper.to_lowercase()] {
            let quote = service.fetch_quote(&input).await.unwrap();
            assert_eq!(quote.ticker, upper);
            assert_eq!(quote.company_name, ticker.company_name());
        }
    }
}

#[tokio::test]
async fn lowercase_input_matches_uppercase_input() {
    let lower = fixed_service(0.5).fetch_quote("aapl").await.unwrap();
    let upper = fixed_service(0.5).fetch_quote("AAPL").await.unwrap();
    assert_eq!(lower, upper);
}

#[tokio::test]
async fn unicode_input_is_uppercased_before_lookup() {
    let service = fixed_service(0.5);
    let input = "M\u{17F}FT";
    assert_eq!(input.to_uppercase(), "MSFT");

    let quote = service.fetch_quote(input).await.unwrap();
    assert_eq!(quote.ticker, "MSFT");
    assert_eq!(quote.company_name, "Microsoft Corporation");
}

#[tokio::test]
async fn walk_starts_from_an_injected_base_price() {
    let service = QuoteService::new(
        TickerStore::with_base_prices([(Ticker::AMZN, 200.0)]),
        FixedRandom(0.5),
        Latency::None,
    );
    let change: f64 = (0.5 - 0.495) * 0.05;
    let first_price = 200.0 * (1.0 + change);

    let first = service.fetch_quote("amzn").await.unwrap();
    assert_eq!(first.price, 200.05);
    assert_eq!(first.previous_close, 200.0);

    let second = service.fetch_quote("AMZN").await.unwrap();
    assert_eq!(second.previous_close, (first_price * 100.0).round() / 100.0);
    assert_eq!(second.price, (first_price * (1.0 + change) * 100.0).round() / 100.0);

    // Untouched symbols keep their seed.
    let aapl = service.fetch_quote("AAPL").await.unwrap();
    assert_eq!(aapl.price, 172.54);
}

#[tokio::test]
async fn tesla_keeps_its_company_name() {
    let quote = seeded_service(3).fetch_quote("tsla").await.unwrap();
    assert_eq!(quote.ticker, "TSLA");
    assert_eq!(quote.company_name, "Tesla, Inc.");
}

#[tokio::test]
async fn reserved_and_unknown_symbols_fail_with_original_input() {
    let service = seeded_service(5);
    for input in ["FAIL", "ZZZZ", "fail", "aApL "] {
        let err = service.fetch_quote(input).await.unwrap_err();
        assert!(matches!(err, QuoteError::InvalidTicker(_)));
        let message = err.to_string();
        assert!(message.contains("Invalid ticker symbol:"));
        assert!(message.contains(input));
    }
}

#[tokio::test]
async fn quotes_respect_price_and_range_invariants() {
    let service = seeded_service(99);
    let epsilon = 1e-9;
    for _ in 0..50 {
        for ticker in Ticker::iter() {
            let quote = service.fetch_quote(&ticker.to_string()).await.unwrap();
            assert!(quote.price > 0.0);
            assert!(quote.previous_close > 0.0);
            assert!(quote.day_low > 0.0);
            assert!(quote.day_high > 0.0);
            assert!(quote.day_high >= quote.price.max(quote.previous_close) * (1.0 - epsilon));
            assert!(quote.day_low <= quote.price.min(quote.previous_close) * (1.0 + epsilon));
            assert!((20_000_000..=70_000_000).contains(&quote.volume));
        }
    }
}

#[tokio::test]
async fn reference_scenario_with_half_draws() {
    let quote = fixed_service(0.5).fetch_quote("AAPL").await.unwrap();
    assert_eq!(quote.price, 172.54);
    assert_eq!(quote.previous_close, 172.50);
    assert_eq!(quote.volume, 45_000_000);
}

#[tokio::test]
async fn second_quote_continues_from_first_price() {
    let service = fixed_service(0.5);
    let first = service.fetch_quote("AAPL").await.unwrap();
    let second = service.fetch_quote("AAPL").await.unwrap();

    let change: f64 = (0.5 - 0.495) * 0.05;
    let first_price = 172.50 * (1.0 + change);
    let second_price = first_price * (1.0 + change);

    assert_eq!(first.price, 172.54);
    assert_eq!(second.price, 172.59);
    assert_eq!(second.price, (second_price * 100.0).round() / 100.0);
    // With a 0.5 draw the previous close equals the base the call started from.
    assert_eq!(second.previous_close, (first_price * 100.0).round() / 100.0);
}

#[tokio::test]
async fn sequential_quotes_usually_differ() {
    let service = seeded_service(11);
    let first = service.fetch_quote("AAPL").await.unwrap();
    let second = service.fetch_quote("AAPL").await.unwrap();
    assert_ne!(first.price, second.price);
}

#[tokio::test]
async fn symbols_walk_independently() {
    let service = fixed_service(0.5);
    service.fetch_quote("AAPL").await.unwrap();
    service.fetch_quote("AAPL").await.unwrap();
    let msft = service.fetch_quote("MSFT").await.unwrap();
    assert_eq!(msft.previous_close, 330.00);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_do_not_lose_updates() {
    let service = Arc::new(fixed_service(0.5));
    let calls = 64;

    let handles: Vec<_> = (0..calls)
        .map(|_| {
            let service = Arc::clone(&service);
            tokio::spawn(async move { service.fetch_quote("nvda").await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let change: f64 = (0.5 - 0.495) * 0.05;
    let mut expected_base: f64 = 488.30;
    for _ in 0..calls {
        expected_base *= 1.0 + change;
    }
    let next = service.fetch_quote("NVDA").await.unwrap();
    assert_eq!(next.previous_close, (expected_base * 100.0).round() / 100.0);
}

#[tokio::test(start_paused = true)]
async fn default_latency_stays_between_half_and_one_second() {
    let service = QuoteService::new(
        TickerStore::seeded(),
        SeededRandom::with_seed(21),
        Latency::default(),
    );
    for input in ["AAPL", "msft", "ZZZZ", "FAIL"] {
        let started = Instant::now();
        let _ = service.fetch_quote(input).await;
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(500), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(1000), "{elapsed:?}");
    }
}

#[tokio::test(start_paused = true)]
async fn failures_also_wait_for_the_delay() {
    let service = QuoteService::new(
        TickerStore::seeded(),
        FixedRandom(0.5),
        Latency::Fixed { ms: 750 },
    );
    let started = Instant::now();
    let err = service.fetch_quote("FAIL").await.unwrap_err();
    assert!(started.elapsed() >= Duration::from_millis(750));
    assert_eq!(err.to_string(), "Invalid ticker symbol: FAIL");
}

#[tokio::test(start_paused = true)]
async fn uniform_latency_draw_precedes_price_draws() {
    // First draw picks the delay, the next five fabricate the quote.
    let service = QuoteService::new(
        TickerStore::seeded(),
        ScriptedRandom::new(vec![0.0, 0.5, 0.5, 0.5, 0.5, 0.5]),
        Latency::default(),
    );
    let started = Instant::now();
    let quote = service.fetch_quote("AAPL").await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(500));
    assert!(started.elapsed() < Duration::from_millis(510));
    assert_eq!(quote.price, 172.54);
}

#[tokio::test(start_paused = true)]
async fn concurrent_requests_overlap_their_delays() {
    let service = QuoteService::new(
        TickerStore::seeded(),
        FixedRandom(0.5),
        Latency::Fixed { ms: 600 },
    );
    let started = Instant::now();
    let results = service.fetch_quotes(&["AAPL", "GOOGL", "FAIL", "amzn"]).await;
    assert!(started.elapsed() < Duration::from_millis(1200));
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 3);
    assert!(results[2].is_err());
}
