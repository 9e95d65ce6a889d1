//! Query integration tests for `SqliteSampleRepository`.

use chrono::NaiveDate;

use amostra_store::{SampleQuery, SampleRepository};
use amostra_store_sqlite::SqliteSampleRepository;
use amostra_types::{SampleFields, SampleStatus};

fn fields(categoria: &str, fabricante: &str, codigo: &str) -> SampleFields {
    SampleFields {
        categoria: categoria.to_string(),
        fabricante: fabricante.to_string(),
        codigo: codigo.to_string(),
        pn_fabricante: String::new(),
        pn_intelbras: String::new(),
        sn: String::new(),
        tipo_amostra: String::new(),
        status: SampleStatus::Pending,
        localizacao: String::new(),
        projeto_poc_evento: String::new(),
        responsavel: String::new(),
        data_saida: NaiveDate::from_ymd_opt(2024, 1, 10).expect("date"),
        data_retorno: None,
        observacoes: None,
    }
}

#[tokio::test]
async fn find_all_returns_all() {
    let repo = SqliteSampleRepository::open_in_memory().expect("open");

    repo.insert(&fields("Sensor", "Acme", "S-100"))
        .await
        .expect("insert 1");
    repo.insert(&fields("Camera", "Vision", "C-200"))
        .await
        .expect("insert 2");

    let all = repo.find_all(SampleQuery::all()).await.expect("find_all");
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn find_all_ordered_by_id() {
    let repo = SqliteSampleRepository::open_in_memory().expect("open");

    repo.insert(&fields("Sensor", "Acme", "S-1")).await.expect("insert");
    repo.insert(&fields("Sensor", "Acme", "S-2")).await.expect("insert");
    repo.insert(&fields("Sensor", "Acme", "S-3")).await.expect("insert");

    let all = repo.find_all(SampleQuery::all()).await.expect("find_all");
    let ids: Vec<i64> = all.iter().map(|s| s.id.as_i64()).collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[tokio::test]
async fn text_filter_matches_codigo_substring() {
    let repo = SqliteSampleRepository::open_in_memory().expect("open");

    repo.insert(&fields("Sensor", "Acme", "S-100"))
        .await
        .expect("insert 1");
    repo.insert(&fields("Camera", "Vision", "C-200"))
        .await
        .expect("insert 2");

    let query = SampleQuery::all().with_text("-10");
    let found = repo.find_all(query).await.expect("find_all");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].fields.codigo, "S-100");
}

#[tokio::test]
async fn text_filter_matches_fabricante_and_categoria() {
    let repo = SqliteSampleRepository::open_in_memory().expect("open");

    repo.insert(&fields("Sensor", "Acme", "S-100"))
        .await
        .expect("insert 1");
    repo.insert(&fields("Camera", "Vision", "C-200"))
        .await
        .expect("insert 2");

    let by_fabricante = repo
        .find_all(SampleQuery::all().with_text("Visio"))
        .await
        .expect("find_all");
    assert_eq!(by_fabricante.len(), 1);
    assert_eq!(by_fabricante[0].fields.fabricante, "Vision");

    let by_categoria = repo
        .find_all(SampleQuery::all().with_text("Senso"))
        .await
        .expect("find_all");
    assert_eq!(by_categoria.len(), 1);
    assert_eq!(by_categoria[0].fields.categoria, "Sensor");
}

#[tokio::test]
async fn empty_text_matches_everything() {
    let repo = SqliteSampleRepository::open_in_memory().expect("open");

    repo.insert(&fields("Sensor", "Acme", "S-100"))
        .await
        .expect("insert 1");
    repo.insert(&fields("Camera", "Vision", "C-200"))
        .await
        .expect("insert 2");

    let found = repo
        .find_all(SampleQuery::all().with_text(""))
        .await
        .expect("find_all");
    assert_eq!(found.len(), 2);
}

#[tokio::test]
async fn text_filter_no_match_returns_empty() {
    let repo = SqliteSampleRepository::open_in_memory().expect("open");

    repo.insert(&fields("Sensor", "Acme", "S-100"))
        .await
        .expect("insert");

    let found = repo
        .find_all(SampleQuery::all().with_text("does-not-exist"))
        .await
        .expect("find_all");
    assert!(found.is_empty());
}

#[tokio::test]
async fn status_filter() {
    let repo = SqliteSampleRepository::open_in_memory().expect("open");

    let mut processed = fields("Sensor", "Acme", "S-100");
    processed.status = SampleStatus::Processed;
    repo.insert(&processed).await.expect("insert 1");
    repo.insert(&fields("Camera", "Vision", "C-200"))
        .await
        .expect("insert 2");

    let found = repo
        .find_all(SampleQuery::all().with_status(SampleStatus::Processed))
        .await
        .expect("find_all");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].fields.codigo, "S-100");
}

#[tokio::test]
async fn limit_and_offset_paginate() {
    let repo = SqliteSampleRepository::open_in_memory().expect("open");

    for i in 1..=5 {
        repo.insert(&fields("Sensor", "Acme", &format!("S-{i}")))
            .await
            .expect("insert");
    }

    let page = repo
        .find_all(SampleQuery::all().with_limit(2).with_offset(2))
        .await
        .expect("find_all");
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].fields.codigo, "S-3");
    assert_eq!(page[1].fields.codigo, "S-4");
}
