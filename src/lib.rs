// src/lib.rs

use sqlx::{Pool, Postgres};

// Importa os módulos
//
// Cada módulo de domínio segue o mesmo padrão: um arquivo `*_router.rs` com as
// rotas HTTP e um arquivo `*_structs.rs` com as estruturas de (de)serialização.
pub mod configuracao; // Configuração lida do ambiente na inicialização
pub mod feedback;     // Módulo de feedback dos clientes
pub mod produtos;     // Módulo de produtos da gôndola
pub mod startup;      // Montagem do servidor HTTP

// Estado compartilhado que contém o pool de conexões com o banco de dados.
// Cada requisição pega uma conexão do pool e a devolve ao terminar.
pub struct AppState {
    pub db_pool: Pool<Postgres>,
}
