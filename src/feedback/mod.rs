// src/feedback/mod.rs

// Declara o submódulo que contém as definições das structs de feedback
pub mod feedback_structs;
// Declara o submódulo que contém as funções de rota relacionadas a feedback
pub mod feedback_router;
