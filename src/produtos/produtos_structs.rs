// src/produtos/produtos_structs.rs

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estrutura que representa um produto no banco de dados.
/// Deriva FromRow para mapeamento direto de resultados de query SQL.
///
/// O preço usa BigDecimal e vira string no JSON ("19.90"), preservando as
/// duas casas decimais que o ponto flutuante não garante.
#[derive(Serialize, FromRow)]
pub struct Produto {
    pub id: i32,
    pub nome: String,
    pub preco: BigDecimal,
    pub display_id: i32,
}

/// Estrutura para receber os dados do novo produto na requisição POST.
///
/// Os campos são opcionais de propósito: campo ausente vira NULL no INSERT
/// e é a restrição NOT NULL do banco que rejeita o cadastro incompleto.
/// Esta camada não pré-valida nada.
#[derive(Deserialize)]
pub struct NovoProduto {
    pub nome: Option<String>,
    pub preco: Option<BigDecimal>,
    pub display_id: Option<i32>,
}

/// Estrutura para a atualização parcial de um produto na requisição PUT.
/// Cada campo presente gera um UPDATE pontual independente.
#[derive(Deserialize)]
pub struct AtualizaProduto {
    pub nome: Option<String>,
    pub preco: Option<BigDecimal>,
    pub display_id: Option<i32>,
}

/// Estrutura de resposta das rotas de mutação de produtos.
#[derive(Serialize)]
pub struct StatusResponse {
    pub id: i32,
    pub status: String,
}
