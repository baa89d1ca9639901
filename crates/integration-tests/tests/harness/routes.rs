//! Handlers standing in for a database-backed application
//!
//! Each route fails the way a real handler would when the driver, the SQL
//! layer or the application itself refuses a request.

use anyhow::Context;
use axum::Router;
use axum::extract::{Path, Query};
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::routing::{get, post};
use dbfront_server::{ApiError, ApiJson};
use dbfront_translate::{ClientError, Failure, SqlError, StatementError};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Insert {
    #[allow(dead_code)]
    pub table: String,
    pub rows: Vec<Row>,
}

#[derive(Deserialize)]
pub struct Row {
    #[allow(dead_code)]
    pub id: u32,
}

#[derive(Deserialize)]
pub struct Limit {
    pub limit: u32,
}

pub fn router() -> Router {
    Router::new()
        .route("/rows", post(insert_rows))
        .route("/client/{code}", get(client_failure))
        .route("/statement/{code}", get(statement_failure))
        .route("/sql/{code}", get(sql_failure))
        .route("/tables/{name}", get(table).delete(drop_table))
        .route("/rows/{id}", get(row))
        .route("/scan", get(scan))
        .route("/login", post(login))
        .route("/parse/{value}", get(parse))
        .route("/decode", get(decode))
        .route("/opaque", get(opaque))
        .route("/panic", get(explode))
}

async fn insert_rows(ApiJson(insert): ApiJson<Insert>) -> (StatusCode, String) {
    (StatusCode::CREATED, insert.rows.len().to_string())
}

async fn client_failure(path: Result<Path<i32>, PathRejection>) -> Result<(), ApiError> {
    let Path(code) = path?;
    Err(ClientError::new(code, format!("client failure {code}")).into())
}

async fn statement_failure(path: Result<Path<i32>, PathRejection>) -> Result<(), ApiError> {
    let Path(code) = path?;
    Err(StatementError::new(code, format!("statement failure {code}")).into())
}

async fn sql_failure(path: Result<Path<i32>, PathRejection>) -> Result<(), ApiError> {
    let Path(code) = path?;
    let result: anyhow::Result<()> = Err(SqlError::new(code, format!("sql failure {code}")).into());
    Ok(result.context("execute statement")?)
}

async fn table(Path(name): Path<String>) -> Result<(), ApiError> {
    Err(Failure::not_found(format!("table {name} does not exist")).into())
}

async fn drop_table(Path(name): Path<String>) -> Result<(), ApiError> {
    Err(Failure::conflict(format!("table {name} is referenced")).into())
}

async fn row(Path(id): Path<u32>) -> Result<String, ApiError> {
    let result: anyhow::Result<String> = Err(anyhow::anyhow!("row {id} missing"));
    Ok(result.context(Failure::not_found(format!("row {id} does not exist")))?)
}

async fn scan(query: Result<Query<Limit>, QueryRejection>) -> Result<String, ApiError> {
    let Query(limit) = query?;
    if limit.limit > 1000 {
        return Err(Failure::bad_request("limit must not exceed 1000").into());
    }
    Ok(limit.limit.to_string())
}

async fn login() -> Result<(), ApiError> {
    Err(Failure::unauthorized("invalid credentials").into())
}

async fn parse(Path(value): Path<String>) -> Result<String, ApiError> {
    let parsed: i64 = value.parse().context("parse row id")?;
    Ok(parsed.to_string())
}

async fn decode() -> Result<String, ApiError> {
    let text = String::from_utf8(vec![0xff, 0xfe]).context("decode column")?;
    Ok(text)
}

async fn opaque() -> Result<(), ApiError> {
    Err(anyhow::anyhow!("replica fell behind").into())
}

async fn explode() -> &'static str {
    panic!("handler exploded")
}
