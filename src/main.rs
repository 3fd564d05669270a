// src/main.rs

use gondola::configuracao::Configuracao;
use gondola::startup::run;
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use tracing_subscriber::EnvFilter;

// Função principal da aplicação Actix Web.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Nível de log controlado por RUST_LOG; padrão "info"
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Lê a configuração do ambiente uma única vez. Credencial ausente derruba
    // o processo aqui, antes de qualquer requisição ser atendida.
    let configuracao = Configuracao::do_ambiente()
        .expect("Falha ao carregar a configuração do banco de dados");

    // Pool de conexões limitado, criado de forma preguiçosa: banco fora do ar
    // aparece como erro da requisição em voo, não na inicialização.
    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy_with(configuracao.banco.opcoes_conexao());

    tracing::info!(
        host = %configuracao.banco.host,
        banco = %configuracao.banco.nome,
        "Iniciando API do Projeto Gôndola na porta 5000..."
    );

    // Escuta em todas as interfaces: a placa na gôndola acessa pela rede local.
    let listener = TcpListener::bind("0.0.0.0:5000")?;
    run(listener, db_pool)?.await
}
