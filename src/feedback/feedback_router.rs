// src/feedback/feedback_router.rs

use actix_web::{get, post, web, HttpResponse, Responder};
use sqlx::query_as;

// Importa as structs definidas no módulo `feedback_structs` dentro da mesma pasta `feedback`
use super::feedback_structs::{FeedbackComProduto, FeedbackResponse, NovoFeedback};

// Importa o AppState do módulo raiz (lib.rs)
use crate::AppState;

/// Rota para o sistema web consultar o feedback registrado.
///
/// Faz o JOIN com a tabela de produtos para mostrar o nome no lugar do id,
/// do mais recente para o mais antigo. Feedback de produto já deletado
/// (referência órfã) fica de fora do JOIN e não aparece na listagem.
#[get("/api/feedback")]
pub async fn buscar_feedback(data: web::Data<AppState>) -> impl Responder {
    let feedback_result = query_as::<_, FeedbackComProduto>(
        r#"
        SELECT p.nome, fc.feedback, fc.momento
        FROM feedback_cliente fc
        JOIN produtos p ON fc.produto_id = p.id
        ORDER BY fc.momento DESC
        "#,
    )
    .fetch_all(&data.db_pool)
    .await;

    match feedback_result {
        Ok(registros) => {
            // Mapeia as linhas do JOIN para a resposta, formatando o momento
            let response: Vec<FeedbackResponse> = registros
                .into_iter()
                .map(|f| FeedbackResponse {
                    produto: f.nome,
                    feedback: f.feedback,
                    momento: f.momento.format("%Y-%m-%d %H:%M:%S").to_string(),
                })
                .collect();

            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            tracing::error!("Erro ao buscar feedback: {:?}", e);
            HttpResponse::InternalServerError().body("Erro ao buscar feedback")
        }
    }
}

/// Rota para o ESP32 enviar o feedback dos botões.
///
/// O momento é atribuído pelo próprio banco (DEFAULT NOW()), nunca pelo
/// cliente. A existência do produto não é conferida: um produto_id sem
/// produto correspondente é aceito e só deixa de aparecer na listagem.
#[post("/api/feedback")]
pub async fn enviar_feedback(
    data: web::Data<AppState>,
    item: web::Json<NovoFeedback>,
) -> impl Responder {
    let result =
        sqlx::query("INSERT INTO feedback_cliente (produto_id, feedback) VALUES ($1, $2)")
            .bind(item.produto_id)
            .bind(&item.feedback)
            .execute(&data.db_pool)
            .await;

    match result {
        Ok(_) => HttpResponse::Created().json(serde_json::json!({ "status": "success" })),
        Err(e) => {
            tracing::error!("Erro ao registrar feedback: {:?}", e);
            HttpResponse::InternalServerError().body("Erro ao registrar feedback")
        }
    }
}
