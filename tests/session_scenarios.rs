//! End-to-end session tests: console input is injected, both services are mocked.

mod helpers;

use std::io::Cursor;

use cyber_scan_x::{run_session, ErrorType, RecordingReporter, SessionOptions, SessionReport};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::{analyzer_for, completion, google_dns_record, TEST_API_KEY, UNREACHABLE_BASE};

struct SessionRun {
    output: String,
    reporter: RecordingReporter,
    report: SessionReport,
}

async fn run_with_input(geo_base: &str, openai_base: &str, key: Option<&str>, input: &str) -> SessionRun {
    let analyzer = analyzer_for(geo_base, openai_base, key);
    let mut input = Cursor::new(input.as_bytes());
    let mut output = Vec::new();
    let mut reporter = RecordingReporter::new();
    let report = run_session(
        &analyzer,
        &mut input,
        &mut output,
        &mut reporter,
        &SessionOptions::default(),
    )
    .await
    .expect("session should not fail on in-memory I/O");
    SessionRun {
        output: String::from_utf8(output).expect("output is UTF-8"),
        reporter,
        report,
    }
}

#[tokio::test]
async fn test_successful_analysis_renders_everything() {
    let geo = MockServer::start().await;
    let openai = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json/8.8.8.8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(google_dns_record()))
        .expect(1)
        .mount(&geo)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(
            "\n  L'adresse 8.8.8.8 appartient à Google LLC.  \n",
        )))
        .expect(1)
        .mount(&openai)
        .await;

    let run = run_with_input(
        &format!("{}/json", geo.uri()),
        &format!("{}/v1", openai.uri()),
        Some(TEST_API_KEY),
        "8.8.8.8\nn\n",
    )
    .await;

    assert!(run.output.contains("🌐 Adresse IP analysée : 8.8.8.8\n"));
    assert!(run.output.contains("🌍 Pays               : United States\n"));
    assert!(run.output.contains("🏙️  Ville              : Mountain View\n"));
    assert!(run.output.contains("🛰️  Latitude           : 37.4\n"));
    assert!(run.output.contains("🧭 Longitude          : -122.1\n"));
    assert!(run.output.contains("📡 Fournisseur (FAI)  : Google LLC\n"));
    assert!(run.output.contains("🕒 Fuseau horaire     : America/Los_Angeles\n"));
    assert!(run.output.contains("https://www.google.com/maps?q=37.4,-122.1\n"));
    assert!(run.output.contains("🧠 Rapport  :"));
    assert!(run
        .output
        .contains("L'adresse 8.8.8.8 appartient à Google LLC.\n"));
    assert!(run
        .output
        .contains("🙏 Merci d’avoir utilisé CYBER SCAN X. À bientôt !"));

    assert!(run.reporter.reports.is_empty());
    assert_eq!(run.report.analyses, 1);
    assert_eq!(run.report.located, 1);
    assert_eq!(run.report.summarized, 1);
    assert_eq!(run.report.stats.total_errors(), 0);
}

#[tokio::test]
async fn test_report_request_carries_prompt_model_and_temperature() {
    let geo = MockServer::start().await;
    let openai = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(google_dns_record()))
        .mount(&geo)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("ok")))
        .expect(1)
        .mount(&openai)
        .await;

    run_with_input(&geo.uri(), &openai.uri(), Some(TEST_API_KEY), "8.8.8.8\nn\n").await;

    let requests = openai
        .received_requests()
        .await
        .expect("request recording is enabled");
    let body: serde_json::Value =
        serde_json::from_slice(&requests[0].body).expect("request body is JSON");
    assert_eq!(body["model"], "gpt-3.5-turbo");
    assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    let messages = body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["role"], "user");
    let content = messages[0]["content"].as_str().unwrap();
    assert!(content.contains("- IP : 8.8.8.8"));
    assert!(content.contains("- FAI : Google LLC"));
    assert!(content.contains("en français"));
}

#[tokio::test]
async fn test_invalid_address_is_rejected_without_network_call() {
    let geo = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(google_dns_record()))
        .expect(0)
        .mount(&geo)
        .await;

    let run = run_with_input(&geo.uri(), UNREACHABLE_BASE, Some(TEST_API_KEY), "999.999.999.999\n").await;

    assert_eq!(run.reporter.kinds(), vec![ErrorType::InvalidAddress]);
    assert_eq!(
        run.reporter.reports[0].1,
        "❌ Adresse IP invalide. Réessaie avec une adresse correcte."
    );
    // Prompted once, rejected, prompted again, then input ended
    assert_eq!(
        run.output
            .matches("🔍 Entrez une adresse IP à analyser : ")
            .count(),
        2
    );
    assert_eq!(run.report.analyses, 0);
    assert_eq!(
        run.report.stats.get_error_count(ErrorType::InvalidAddress),
        1
    );
}

#[tokio::test]
async fn test_service_failure_skips_report() {
    let geo = MockServer::start().await;
    let openai = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/10.0.0.1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "fail", "message": "invalid query"})),
        )
        .expect(1)
        .mount(&geo)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("unused")))
        .expect(0)
        .mount(&openai)
        .await;

    let run = run_with_input(&geo.uri(), &openai.uri(), Some(TEST_API_KEY), "10.0.0.1\nn\n").await;

    assert_eq!(run.reporter.kinds(), vec![ErrorType::GeolocationFailure]);
    assert_eq!(
        run.reporter.reports[0].1,
        "❌ Erreur retournée par l’API : invalid query"
    );
    assert!(!run.output.contains("Adresse IP analysée"));
    assert!(!run.output.contains("🧠 Rapport"));
    assert!(run.output.contains("🔁 Voulez-vous analyser une autre adresse IP ? (o/n) : "));
    assert_eq!(run.report.analyses, 1);
    assert_eq!(run.report.located, 0);
}

#[tokio::test]
async fn test_report_transport_error_keeps_geolocation_section() {
    let geo = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/8.8.8.8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(google_dns_record()))
        .expect(1)
        .mount(&geo)
        .await;

    let run = run_with_input(&geo.uri(), UNREACHABLE_BASE, Some(TEST_API_KEY), "8.8.8.8\nn\n").await;

    assert!(run.output.contains("🌐 Adresse IP analysée : 8.8.8.8\n"));
    assert!(run.output.contains("https://www.google.com/maps?q=37.4,-122.1\n"));
    assert_eq!(run.reporter.kinds(), vec![ErrorType::SummaryFailure]);
    assert!(run.reporter.reports[0]
        .1
        .starts_with("❌ Erreur lors de la génération du rapport IA : "));

    // The report heading is followed directly by the closing rule
    let rule = "=".repeat(60);
    let dashes = "-".repeat(60);
    let expected_tail = format!("🧠 Rapport  :\n{}\n{}\n", dashes, rule);
    assert!(run.output.contains(&expected_tail), "{}", run.output);

    assert_eq!(run.report.located, 1);
    assert_eq!(run.report.summarized, 0);
}

#[tokio::test]
async fn test_missing_api_key_reports_and_continues() {
    let geo = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(google_dns_record()))
        .expect(1)
        .mount(&geo)
        .await;

    let run = run_with_input(&geo.uri(), UNREACHABLE_BASE, None, "8.8.8.8\nn\n").await;

    assert_eq!(run.reporter.kinds(), vec![ErrorType::SummaryFailure]);
    assert!(run.reporter.reports[0].1.contains("OPENAI_API_KEY"));
    assert!(run.output.contains("Adresse IP analysée : 8.8.8.8"));
}

#[tokio::test]
async fn test_affirmative_answer_runs_another_analysis() {
    let geo = MockServer::start().await;
    let openai = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/8.8.8.8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(google_dns_record()))
        .expect(1)
        .mount(&geo)
        .await;
    Mock::given(method("GET"))
        .and(path("/2606:4700:4700::1111"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "query": "2606:4700:4700::1111",
            "country": "Canada",
            "lat": 43.7,
            "lon": -79.4
        })))
        .expect(1)
        .mount(&geo)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Rapport.")))
        .expect(2)
        .mount(&openai)
        .await;

    let run = run_with_input(
        &geo.uri(),
        &openai.uri(),
        Some(TEST_API_KEY),
        "8.8.8.8\nO\nnot-an-ip\n2606:4700:4700::1111\nn\n",
    )
    .await;

    assert_eq!(run.report.analyses, 2);
    assert_eq!(run.report.located, 2);
    assert_eq!(run.report.summarized, 2);
    assert_eq!(run.reporter.kinds(), vec![ErrorType::InvalidAddress]);
    assert!(run
        .output
        .contains("🌐 Adresse IP analysée : 2606:4700:4700::1111\n"));
    assert!(run.output.contains("🏙️  Ville              : N/A\n"));
    assert!(run.output.contains("https://www.google.com/maps?q=43.7,-79.4\n"));
}

#[tokio::test]
async fn test_end_of_input_at_continue_prompt_stops() {
    let geo = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "fail", "message": "reserved range"})),
        )
        .expect(1)
        .mount(&geo)
        .await;

    let run = run_with_input(&geo.uri(), UNREACHABLE_BASE, None, "127.0.0.1\n").await;

    assert_eq!(run.report.analyses, 1);
    assert!(run.output.ends_with("🙏 Merci d’avoir utilisé CYBER SCAN X. À bientôt !\n"));
}
