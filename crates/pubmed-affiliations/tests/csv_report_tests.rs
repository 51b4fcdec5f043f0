//! End-to-end report tests: mocked API in, CSV file out.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pubmed_affiliations::client::PubMedClient;
use pubmed_affiliations::config::Config;
use pubmed_affiliations::formatters::save_to_csv;
use pubmed_affiliations::pipeline::fetch_research_papers;

const HEADER: &str = "PubMed ID,Title,Publication Date,Non-Academic Author,Company Affiliation,Corresponding Author Email\r\n";

async fn run_to_file(mock_server: &MockServer) -> String {
    let client = PubMedClient::new(Config::for_testing(&mock_server.uri())).unwrap();
    let papers = fetch_research_papers(&client, "antibody", 20, false).await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("research_papers.csv");
    save_to_csv(&papers, &file).unwrap();
    std::fs::read_to_string(&file).unwrap()
}

#[tokio::test]
async fn test_report_is_byte_exact() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/entrez/eutils/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "esearchresult": {"count": "3", "idlist": ["111", "222", "333"]}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/entrez/eutils/esummary.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {
                "uids": ["111", "222"],
                "111": {
                    "title": "Antibody engineering at scale",
                    "pubdate": "2023 Nov 2",
                    "authors": [
                        {"name": "Smith A", "affiliation": "Genmab Biotech, Copenhagen"},
                        {"name": "Jones B", "affiliation": "University of Utrecht"},
                        {
                            "name": "Lee C",
                            "affiliation": "Acme Therapeutics. Corresponding author.",
                            "email": "lee@acme.com"
                        }
                    ]
                },
                "222": {
                    "title": "Sleep and memory",
                    "pubdate": "2021",
                    "authors": [{"name": "Park D", "affiliation": "Seoul National University"}]
                }
            }
        })))
        .mount(&mock_server)
        .await;

    let written = run_to_file(&mock_server).await;

    let expected = format!(
        "{HEADER}\
         111,Antibody engineering at scale,2023 Nov 2,\"Smith A, Lee C\",\"Genmab Biotech, Copenhagen, Acme Therapeutics. Corresponding author.\",lee@acme.com\r\n\
         222,Sleep and memory,2021,N/A,N/A,N/A\r\n\
         333,N/A,N/A,N/A,N/A,N/A\r\n"
    );
    assert_eq!(written, expected);
}

#[tokio::test]
async fn test_zero_results_writes_header_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/entrez/eutils/esearch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"esearchresult": {"idlist": []}})),
        )
        .mount(&mock_server)
        .await;

    assert_eq!(run_to_file(&mock_server).await, HEADER);
}

#[tokio::test]
async fn test_api_failure_writes_header_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/entrez/eutils/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    assert_eq!(run_to_file(&mock_server).await, HEADER);
}

#[tokio::test]
async fn test_unicode_survives_round_trip_to_disk() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/entrez/eutils/esearch.fcgi"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"esearchresult": {"idlist": ["9"]}})),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/entrez/eutils/esummary.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {"9": {
                "title": "Étude sur les protéines",
                "pubdate": "2020",
                "authors": [{"name": "Müller S", "affiliation": "Roche Pharma AG, Basel"}]
            }}
        })))
        .mount(&mock_server)
        .await;

    let written = run_to_file(&mock_server).await;
    assert!(written.ends_with(
        "9,Étude sur les protéines,2020,Müller S,\"Roche Pharma AG, Basel\",N/A\r\n"
    ));
}
