// Prompt fragments for petition generation.
// Fixed text lives here; `builder.rs` decides which fragments appear and fills the gaps.

/// Opening instruction: persona, tone and the task.
pub const PREAMBLE: &str = "\
Você é um assistente jurídico especialista em criar petições iniciais para o Juizado Especial Cível (JEC) do Brasil, \
com foco em direito do consumidor contra concessionárias de energia elétrica. \
Sua linguagem deve ser formal, clara, objetiva e persuasiva.
Baseado nos dados do formulário abaixo, gere o texto completo de uma petição inicial.";

pub const STRUCTURE_HEADING: &str = "ESTRUTURA DA PETIÇÃO:";

pub const CASE_DATA_HEADING: &str = "DADOS DETALHADOS DO CASO PARA USAR NA NARRAÇÃO DOS FATOS:";

pub const FINAL_REQUEST: &str = "Agora, redija a petição completa.";

// Fallbacks for absent fields. Every interpolation site has one.
pub const PLACEHOLDER_VENUE: &str = "[Cidade e Estado não informados]";
pub const PLACEHOLDER_CLOSING_VENUE: &str = "[Local]";
pub const PLACEHOLDER_DATE: &str = "[Data]";
pub const PLACEHOLDER_AUTHOR_NAME: &str = "[Nome Completo do Autor]";
pub const NOT_INFORMED: &str = "não informado";
pub const PLACEHOLDER_COMPANY_NAME: &str = "[Nome da empresa a ser apurado]";
pub const PLACEHOLDER_CNPJ: &str = "(a ser consultado)";
pub const PLACEHOLDER_COMPANY_ADDRESS: &str = "(endereço a ser consultado)";

/// How the front-end renders an untouched currency input.
pub const ZERO_AMOUNT: &str = "R$ 0,00";
pub const DEFAULT_MORAL_VALUE: &str = "R$ 5.000,00 (cinco mil reais)";
/// Moral-damages addend used in the value of the claim when no amount was given.
pub const DEFAULT_MORAL_ADDEND: &str = "R$ 5.000,00";

// Claimant boilerplate not collected by the form.
pub const AUTHOR_NATIONALITY: &str = "brasileiro(a)";
pub const AUTHOR_CIVIL_STATUS: &str = "estado civil desconhecido";
pub const AUTHOR_PROFESSION: &str = "profissão desconhecida";

pub const FACTS_INSTRUCTION: &str = "\
**Seção \"DOS FATOS\":** Narre os acontecimentos de forma cronológica e detalhada, usando as respostas do usuário \
listadas em \"DADOS DETALHADOS DO CASO\". Seja claro, coeso e direto. Transforme os dados brutos em uma narrativa fluida.";

pub const LEGAL_GROUNDS_INSTRUCTION: &str = "\
**Seção \"DO DIREITO\":** Fundamente juridicamente o pedido. Cite o Código de Defesa do Consumidor (CDC), \
especialmente a falha na prestação de serviço (Art. 14), a responsabilidade objetiva da empresa, e, se aplicável, \
a cobrança indevida e o direito à repetição de indébito (Art. 42), e o dano moral puro (in re ipsa) \
pela perda de tempo útil e pelo transtorno causado.";

pub const URGENT_RELIEF_INSTRUCTION: &str = "\
**Seção \"DA TUTELA DE URGÊNCIA\":** O autor pediu uma decisão urgente. Justifique a necessidade da medida liminar \
com base no \"periculum in mora\" (o perigo da demora, ex: o autor está sem energia) e no \"fumus boni iuris\" \
(a fumaça do bom direito, ex: as contas estão pagas), explicando por que o autor não pode esperar pela decisão final.";

pub const RELIEF_HEADING: &str = "**Seção \"DOS PEDIDOS\":** Liste todos os pedidos de forma clara e numerada:";
pub const RELIEF_CITATION: &str =
    "A citação da ré para responder à presente ação, sob pena de revelia;";
pub const RELIEF_URGENT: &str = "\
A concessão da tutela de urgência, para determinar que a ré [descreva o pedido liminar com base nos fatos, \
ex: restabeleça o fornecimento de energia no endereço do autor em 24h, sob pena de multa diária];";
pub const RELIEF_BURDEN_OF_PROOF: &str =
    "A inversão do ônus da prova, conforme o Art. 6º, VIII, do CDC;";
pub const RELIEF_COSTS: &str =
    "A condenação da ré ao pagamento das custas processuais e honorários advocatícios, se houver.";

pub const CLOSING_FORMULA: &str = "Nestes termos, pede deferimento.";
pub const SIGNATURE_LINE: &str = "________________________________________";
