// src/produtos/produtos_router.rs

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use sqlx::{query_as, Row};

// Importa as structs definidas no módulo `produtos_structs` dentro da mesma pasta `produtos`
use super::produtos_structs::{AtualizaProduto, NovoProduto, Produto, StatusResponse};

// Importa o AppState do módulo raiz (lib.rs)
use crate::AppState;

/// Rota para buscar todos os produtos da gôndola.
///
/// A listagem vem ordenada pelo display_id, que identifica a posição física
/// do produto na prateleira; é essa ordem que o ESP32 e a interface web
/// esperam. Gôndola vazia responde um array vazio, nunca erro.
#[get("/api/produtos")]
pub async fn buscar_produtos(data: web::Data<AppState>) -> impl Responder {
    // Executa a consulta para buscar todos os produtos
    let produtos_result = query_as::<_, Produto>(
        "SELECT id, nome, preco, display_id FROM produtos ORDER BY display_id",
    )
    .fetch_all(&data.db_pool)
    .await;

    match produtos_result {
        Ok(produtos) => HttpResponse::Ok().json(produtos),
        Err(e) => {
            // Em caso de erro, registra no log e retorna um erro 500
            tracing::error!("Erro ao buscar produtos: {:?}", e);
            HttpResponse::InternalServerError().body("Erro ao buscar produtos")
        }
    }
}

/// Rota para cadastrar um novo produto.
///
/// Insere o produto na tabela 'produtos' e retorna o id gerado pelo banco.
/// Campo ausente no corpo segue como NULL até o banco, que rejeita o INSERT;
/// o cliente recebe o erro 500 genérico.
#[post("/api/produtos")]
pub async fn cadastrar_produto(
    data: web::Data<AppState>,
    item: web::Json<NovoProduto>, // O corpo da requisição JSON é desserializado para NovoProduto
) -> impl Responder {
    // Executa a query SQL para inserir um novo produto e retornar o ID gerado
    let result = sqlx::query(
        "INSERT INTO produtos (nome, preco, display_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(&item.nome)       // Binda o nome do produto
    .bind(&item.preco)      // Binda o preço do produto (BigDecimal)
    .bind(item.display_id)  // Binda a posição física na gôndola
    .fetch_one(&data.db_pool)
    .await;

    match result {
        Ok(row) => {
            // Tenta obter o ID gerado automaticamente pelo banco de dados
            match row.try_get::<i32, &str>("id") {
                Ok(id) => HttpResponse::Created().json(StatusResponse {
                    id,
                    status: "Produto adicionado com sucesso!".to_string(),
                }),
                Err(e) => {
                    tracing::error!("Erro ao obter id do novo produto: {:?}", e);
                    HttpResponse::InternalServerError().body("Erro ao processar resposta")
                }
            }
        }
        Err(e) => {
            tracing::error!("Erro ao inserir produto: {:?}", e);
            HttpResponse::InternalServerError().body("Erro ao inserir produto")
        }
    }
}

/// Rota para atualizar um produto existente.
///
/// Atualização parcial: cada campo presente no corpo gera um UPDATE pontual
/// próprio, executado e confirmado de forma independente dos demais (não há
/// transação englobando o grupo). Um id inexistente atualiza zero linhas e
/// ainda assim responde sucesso; os testes fixam esse contrato.
#[put("/api/produtos/{id}")]
pub async fn atualizar_produto(
    data: web::Data<AppState>,
    path: web::Path<i32>,
    item: web::Json<AtualizaProduto>,
) -> impl Responder {
    let id = path.into_inner();

    if let Some(nome) = &item.nome {
        let result = sqlx::query("UPDATE produtos SET nome = $1 WHERE id = $2")
            .bind(nome)
            .bind(id)
            .execute(&data.db_pool)
            .await;
        if let Err(e) = result {
            tracing::error!("Erro ao atualizar nome do produto {}: {:?}", id, e);
            return HttpResponse::InternalServerError().body("Erro ao atualizar produto");
        }
    }

    if let Some(preco) = &item.preco {
        let result = sqlx::query("UPDATE produtos SET preco = $1 WHERE id = $2")
            .bind(preco)
            .bind(id)
            .execute(&data.db_pool)
            .await;
        if let Err(e) = result {
            tracing::error!("Erro ao atualizar preço do produto {}: {:?}", id, e);
            return HttpResponse::InternalServerError().body("Erro ao atualizar produto");
        }
    }

    if let Some(display_id) = item.display_id {
        let result = sqlx::query("UPDATE produtos SET display_id = $1 WHERE id = $2")
            .bind(display_id)
            .bind(id)
            .execute(&data.db_pool)
            .await;
        if let Err(e) = result {
            tracing::error!("Erro ao atualizar display_id do produto {}: {:?}", id, e);
            return HttpResponse::InternalServerError().body("Erro ao atualizar produto");
        }
    }

    HttpResponse::Ok().json(StatusResponse {
        id,
        status: "Produto atualizado com sucesso!".to_string(),
    })
}

/// Rota para deletar um produto.
///
/// Deletar um id inexistente também responde sucesso (zero linhas afetadas).
/// Os feedbacks que apontavam para o produto não são apagados: viram
/// referências órfãs, que a listagem de /api/feedback simplesmente omite.
#[delete("/api/produtos/{id}")]
pub async fn deletar_produto(data: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    let id = path.into_inner();

    let result = sqlx::query("DELETE FROM produtos WHERE id = $1")
        .bind(id)
        .execute(&data.db_pool)
        .await;

    match result {
        Ok(_) => HttpResponse::Ok().json(StatusResponse {
            id,
            status: "Produto deletado com sucesso!".to_string(),
        }),
        Err(e) => {
            tracing::error!("Erro ao deletar produto {}: {:?}", id, e);
            HttpResponse::InternalServerError().body("Erro ao deletar produto")
        }
    }
}
