// tests/common/mod.rs

use gondola::configuracao::ConfiguracaoBanco;
use gondola::startup::run;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, Executor, PgConnection, PgPool};

/// Aplicação de teste: endereço HTTP e pool apontando para o banco exclusivo.
pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
}

/// Sobe a aplicação em uma porta aleatória, com um banco recém-criado só para
/// este teste. Sem Postgres disponível, avisa e devolve None, e o teste
/// termina sem falhar.
pub async fn spawn_app() -> Option<TestApp> {
    let config = configuracao_de_teste();

    let db_pool = match configurar_banco(&config).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Pulando teste: sem conexão com o Postgres: {}", err);
            return None;
        }
    };

    let listener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Falha ao abrir porta aleatória");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = run(listener, db_pool.clone()).expect("Falha ao montar o servidor");
    let _ = tokio::spawn(server);

    Some(TestApp { address, db_pool })
}

/// Cadastra um produto pela API e devolve o id gerado. Útil nos testes em que
/// o cadastro em si não é o comportamento sob teste.
pub async fn cadastrar_produto(
    client: &reqwest::Client,
    address: &str,
    nome: &str,
    preco: &str,
    display_id: i32,
) -> i64 {
    let resposta = client
        .post(format!("{}/api/produtos", address))
        .json(&serde_json::json!({ "nome": nome, "preco": preco, "display_id": display_id }))
        .send()
        .await
        .expect("Falha ao executar a requisição");
    assert_eq!(201, resposta.status().as_u16());

    let corpo: serde_json::Value = resposta.json().await.expect("Resposta não é JSON");
    corpo["id"].as_i64().expect("Resposta sem o id gerado")
}

fn configuracao_de_teste() -> ConfiguracaoBanco {
    ConfiguracaoBanco {
        host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
        // Um banco novo por teste, para um teste não enxergar os dados do outro
        nome: format!("gondola_teste_{}", uuid::Uuid::new_v4().simple()),
        usuario: std::env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
        senha: std::env::var("DB_PASSWORD").unwrap_or_else(|_| "postgres".to_string()),
    }
}

/// Cria o banco exclusivo do teste e aplica as migrações.
async fn configurar_banco(
    config: &ConfiguracaoBanco,
) -> Result<PgPool, Box<dyn std::error::Error>> {
    // Conecta ao banco de manutenção para poder criar o banco do teste
    let mut connection =
        PgConnection::connect_with(&config.opcoes_conexao().database("postgres")).await?;

    connection
        .execute(format!(r#"CREATE DATABASE "{}""#, config.nome).as_str())
        .await?;

    let db_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect_with(config.opcoes_conexao())
        .await?;

    sqlx::migrate!("./migrations").run(&db_pool).await?;

    Ok(db_pool)
}
