//! Built-in message tables. Constructed once at startup and injected into the
//! notifier and the resolver; nothing here is consulted as ambient state.

use super::notification::{Icon, Variant};
use super::route::{MessageTable, RouteMessages};
use super::tooltip::{TooltipEntry, TooltipTable};

const ENTER_MESSAGES: [(&str, &str); 4] = [
    ("/", "Você entrou no: Painel Principal"),
    ("/forum", "Você entrou nos: Fóruns de Discussão"),
    ("/study-groups", "Você entrou nos: Grupos de Estudo"),
    ("/ranking", "Você entrou no: Ranking da Comunidade"),
];

const EXIT_MESSAGES: [(&str, &str); 4] = [
    ("/", "Você saiu do: Painel Principal"),
    ("/forum", "Você saiu dos: Fóruns de Discussão"),
    ("/study-groups", "Você saiu dos: Grupos de Estudo"),
    ("/ranking", "Você saiu do: Ranking da Comunidade"),
];

// Order is load-bearing: resolution is first match in this order.
const TOOLTIPS: [(&str, Icon, &str, Variant); 26] = [
    ("criar", Icon::Plus, "Você criou um novo item", Variant::Success),
    ("adicionar", Icon::Plus, "Item adicionado com sucesso", Variant::Success),
    ("participar", Icon::Check, "Você se juntou com sucesso", Variant::Success),
    ("entrar", Icon::Check, "Você entrou no grupo", Variant::Success),
    ("salvar", Icon::Check, "Dados salvos com sucesso", Variant::Success),
    ("ver", Icon::Eye, "Visualizando conteúdo", Variant::Info),
    ("visualizar", Icon::Eye, "Abrindo visualização", Variant::Info),
    ("carregar", Icon::Info, "Carregando mais itens", Variant::Info),
    ("expandir", Icon::Info, "Expandindo conteúdo", Variant::Info),
    ("buscar", Icon::Search, "Realizando busca", Variant::Info),
    ("pesquisar", Icon::Search, "Pesquisando conteúdo", Variant::Info),
    ("filtrar", Icon::Filter, "Aplicando filtros", Variant::Info),
    ("exportar", Icon::Download, "Exportando dados", Variant::Success),
    ("baixar", Icon::Download, "Download iniciado", Variant::Success),
    ("upload", Icon::Upload, "Upload realizado", Variant::Success),
    ("enviar", Icon::Upload, "Enviado com sucesso", Variant::Success),
    ("editar", Icon::Edit, "Abrindo para edição", Variant::Info),
    ("configurar", Icon::Settings, "Abrindo configurações", Variant::Info),
    ("atualizar", Icon::Zap, "Atualizando dados", Variant::Info),
    ("curtir", Icon::Heart, "Você curtiu este conteúdo", Variant::Success),
    ("compartilhar", Icon::Share, "Compartilhando conteúdo", Variant::Success),
    ("comentar", Icon::MessageCircle, "Abrindo comentários", Variant::Info),
    ("responder", Icon::MessageCircle, "Respondendo mensagem", Variant::Info),
    ("deletar", Icon::Trash, "Item removido", Variant::Warning),
    ("remover", Icon::Trash, "Removido com sucesso", Variant::Warning),
    ("excluir", Icon::Trash, "Excluído permanentemente", Variant::Warning),
];

const DEFAULT_TOOLTIP: (&str, Icon, &str, Variant) = (
    "default",
    Icon::Info,
    "Ação realizada com sucesso",
    Variant::Info,
);

pub fn default_route_messages() -> RouteMessages {
    RouteMessages::new(
        MessageTable::from_pairs(ENTER_MESSAGES),
        MessageTable::from_pairs(EXIT_MESSAGES),
    )
}

pub fn default_tooltip_table() -> TooltipTable {
    let entry = |(key, icon, message, variant): (&str, Icon, &str, Variant)| {
        TooltipEntry::new(key, icon, message, variant)
    };
    TooltipTable::new(
        TOOLTIPS.into_iter().map(entry).collect(),
        entry(DEFAULT_TOOLTIP),
    )
}

#[cfg(test)]
mod tests {
    use super::{default_route_messages, default_tooltip_table};
    use crate::notify::{RouteKey, normalize_action};

    #[test]
    fn tooltip_keys_are_already_normalized() {
        let table = default_tooltip_table();
        for entry in table.entries() {
            assert_eq!(normalize_action(&entry.key), entry.key);
        }
    }

    #[test]
    fn every_entered_route_has_an_exit_message() {
        let messages = default_route_messages();
        for path in ["/", "/forum", "/study-groups", "/ranking"] {
            let route = RouteKey::new(path);
            assert!(messages.enter.get(&route).is_some(), "{path} enter");
            assert!(messages.exit.get(&route).is_some(), "{path} exit");
        }
        assert!(messages.enter.get(&RouteKey::new("/profile")).is_none());
    }
}
