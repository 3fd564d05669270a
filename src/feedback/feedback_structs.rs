// src/feedback/feedback_structs.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estrutura para receber o feedback enviado pelos botões do ESP32.
/// Campo ausente vira NULL no INSERT e é recusado pelo próprio banco.
#[derive(Deserialize)]
pub struct NovoFeedback {
    pub produto_id: Option<i32>,
    pub feedback: Option<String>,
}

/// Linha do JOIN entre feedback_cliente e produtos, como sai do banco.
#[derive(FromRow)]
pub struct FeedbackComProduto {
    pub nome: String,
    pub feedback: String,
    pub momento: NaiveDateTime,
}

/// Estrutura para a resposta da API ao listar o feedback.
/// O momento já sai formatado como "YYYY-MM-DD HH:MM:SS".
#[derive(Serialize)]
pub struct FeedbackResponse {
    pub produto: String,
    pub feedback: String,
    pub momento: String,
}
