// src/configuracao.rs

use sqlx::postgres::PgConnectOptions;

/// Erro de configuração detectado na inicialização.
///
/// Credencial ausente é fatal antes de o servidor subir: nenhuma requisição
/// chega a ser atendida sem DB_USER e DB_PASSWORD resolvidos.
#[derive(Debug, thiserror::Error)]
pub enum ErroConfiguracao {
    #[error("variável de ambiente {0} não definida")]
    VariavelAusente(&'static str),
}

/// Configuração da aplicação, construída uma única vez na inicialização
/// e repassada explicitamente. Os handlers nunca leem o ambiente.
#[derive(Debug, Clone)]
pub struct Configuracao {
    pub banco: ConfiguracaoBanco,
}

/// Endereço e credenciais do banco PostgreSQL.
#[derive(Debug, Clone)]
pub struct ConfiguracaoBanco {
    pub host: String,
    pub nome: String,
    pub usuario: String,
    pub senha: String,
}

impl Configuracao {
    /// Lê a configuração das variáveis de ambiente, com suporte a arquivo .env.
    ///
    /// DB_USER e DB_PASSWORD são obrigatórias. DB_HOST e DB_NAME aceitam os
    /// padrões do projeto (localhost / projeto_gondola).
    pub fn do_ambiente() -> Result<Configuracao, ErroConfiguracao> {
        // Carrega as variáveis do arquivo .env, se existir
        dotenvy::dotenv().ok();

        let usuario = std::env::var("DB_USER")
            .map_err(|_| ErroConfiguracao::VariavelAusente("DB_USER"))?;
        let senha = std::env::var("DB_PASSWORD")
            .map_err(|_| ErroConfiguracao::VariavelAusente("DB_PASSWORD"))?;
        let host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let nome = std::env::var("DB_NAME").unwrap_or_else(|_| "projeto_gondola".to_string());

        Ok(Configuracao {
            banco: ConfiguracaoBanco {
                host,
                nome,
                usuario,
                senha,
            },
        })
    }
}

impl ConfiguracaoBanco {
    /// Opções de conexão consumidas pelo pool do sqlx.
    pub fn opcoes_conexao(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .username(&self.usuario)
            .password(&self.senha)
            .database(&self.nome)
    }
}
