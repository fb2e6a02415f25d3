//! Friendlier wording for the rejections the API sends back.

/// Server phrase and the message shown for it
const MESSAGES: [(&str, &str); 7] = [
    (
        "Reserva fora do horário de funcionamento do laboratório.",
        "⏰ A reserva está fora do horário de funcionamento do laboratório. Verifique os horários disponíveis.",
    ),
    (
        "A reserva deve ser solicitada com pelo menos 24 horas de antecedência.",
        "📅 A reserva deve ser solicitada com pelo menos 24 horas de antecedência.",
    ),
    (
        "Reserva duplicada para o mesmo professor e turma.",
        "⚠️ Este professor já possui uma reserva no mesmo horário para esta turma.",
    ),
    (
        "O laboratório já está reservado neste intervalo.",
        "🔒 O laboratório já está reservado neste intervalo de horário. Escolha outro horário.",
    ),
    (
        "A data/hora de início deve ser anterior à data/hora de fim.",
        "⌚ A data/hora de início deve ser anterior à data/hora de fim.",
    ),
    ("Status inválido.", "❌ O status da reserva é inválido."),
    (
        "Não é possível alterar reserva concluída.",
        "🔐 Não é possível alterar uma reserva que já foi concluída.",
    ),
];

/// Maps a server error message to the text shown to the user: an exact
/// phrase match first, then a phrase contained in the message, ignoring case
pub fn localize_error(message: &str) -> String {
    if let Some((_, localized)) = MESSAGES.iter().find(|(phrase, _)| *phrase == message) {
        return localized.to_string();
    }

    let lowered = message.to_lowercase();
    MESSAGES
        .iter()
        .find(|(phrase, _)| lowered.contains(&phrase.to_lowercase()))
        .map(|(_, localized)| localized.to_string())
        .unwrap_or_else(|| format!("❌ Erro: {message}"))
}
