// src/startup.rs

use crate::feedback;
use crate::produtos;
use crate::AppState;
use actix_cors::Cors;
use actix_files::Files;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use sqlx::{Pool, Postgres};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

/// Monta e inicia o servidor HTTP sobre o listener recebido.
///
/// Receber o `TcpListener` pronto permite que os testes de integração subam a
/// aplicação em uma porta aleatória com um pool próprio.
pub fn run(listener: TcpListener, db_pool: Pool<Postgres>) -> Result<Server, std::io::Error> {
    // web::Data é usado para compartilhar o estado imutável entre as rotas.
    let app_state = web::Data::new(AppState { db_pool });

    let server = HttpServer::new(move || {
        App::new()
            // Log estruturado por requisição
            .wrap(TracingLogger::default())
            // Permite que a API seja acessada de qualquer origem
            // (necessário para o ESP32 e para o front-end em outra porta)
            .wrap(Cors::permissive())
            .app_data(app_state.clone())
            // Módulo de Produtos
            .service(produtos::produtos_router::buscar_produtos)
            .service(produtos::produtos_router::cadastrar_produto)
            .service(produtos::produtos_router::atualizar_produto)
            .service(produtos::produtos_router::deletar_produto)
            // Módulo de Feedback
            .service(feedback::feedback_router::buscar_feedback)
            .service(feedback::feedback_router::enviar_feedback)
            // Interface web servida na raiz; registrada por último para não
            // encobrir as rotas de /api
            .service(Files::new("/", "./static").index_file("index.html"))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
