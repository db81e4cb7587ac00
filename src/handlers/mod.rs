//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청에서 입력을 추출해 서비스에 넘기고, 결과를 JSON 응답으로 변환합니다.
//! 실패는 `AppError`를 그대로 반환하며 `ResponseError` 구현이 상태 코드를 결정합니다.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Handlers (이 모듈)            │ ← 헤더 추출, 응답 직렬화
//! ├──────────────────────────────┤
//! │ SessionRefreshService        │ ← 갱신 파이프라인
//! ├──────────────────────────────┤
//! │ UserStore (MongoDB / Memory) │ ← 토큰 목록 조회/추가
//! └──────────────────────────────┘
//! ```

pub mod session_handlers;
