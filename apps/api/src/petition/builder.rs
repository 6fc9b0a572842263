//! Prompt builder: turns a `FormSubmission` into the complete instruction document.
//!
//! One builder per numbered section of the petition, composed in fixed order by
//! `build_prompt`. Sections that render empty are skipped and the remaining ones are
//! renumbered, so the urgent-relief toggle never leaves a gap.
//!
//! Pure and total: the same submission always yields the same bytes.

use crate::petition::form::FormSubmission;
use crate::petition::prompts::{
    AUTHOR_CIVIL_STATUS, AUTHOR_NATIONALITY, AUTHOR_PROFESSION, CASE_DATA_HEADING,
    CLOSING_FORMULA, DEFAULT_MORAL_ADDEND, DEFAULT_MORAL_VALUE, FACTS_INSTRUCTION, FINAL_REQUEST,
    LEGAL_GROUNDS_INSTRUCTION, NOT_INFORMED, PLACEHOLDER_AUTHOR_NAME, PLACEHOLDER_CLOSING_VENUE,
    PLACEHOLDER_CNPJ, PLACEHOLDER_COMPANY_ADDRESS, PLACEHOLDER_COMPANY_NAME, PLACEHOLDER_DATE,
    PLACEHOLDER_VENUE, PREAMBLE, RELIEF_BURDEN_OF_PROOF, RELIEF_CITATION, RELIEF_COSTS,
    RELIEF_HEADING, RELIEF_URGENT, SIGNATURE_LINE, STRUCTURE_HEADING, URGENT_RELIEF_INSTRUCTION,
    ZERO_AMOUNT,
};

type SectionBuilder = fn(&FormSubmission) -> String;

/// Petition structure, in document order.
const SECTIONS: [SectionBuilder; 9] = [
    header_section,
    claimant_section,
    respondent_section,
    facts_section,
    legal_grounds_section,
    urgent_relief_section,
    relief_section,
    claim_value_section,
    closing_section,
];

/// Builds the full prompt sent to the model.
pub fn build_prompt(form: &FormSubmission) -> String {
    let structure = SECTIONS
        .iter()
        .map(|section| section(form))
        .filter(|text| !text.is_empty())
        .enumerate()
        .map(|(i, text)| format!("{}.  {}", i + 1, text))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{PREAMBLE}\n\n{STRUCTURE_HEADING}\n{structure}\n\n{}\n\n{FINAL_REQUEST}\n",
        case_data_section(form)
    )
}

fn or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value.as_deref().unwrap_or(fallback)
}

/// 1. Court addressing line.
pub fn header_section(form: &FormSubmission) -> String {
    format!(
        "**Endereçamento:** \"EXCELENTÍSSIMO(A) SENHOR(A) DOUTOR(A) JUIZ(A) DE DIREITO DO JUIZADO ESPECIAL CÍVEL DA COMARCA DE {}.\"",
        or(&form.action_city_state, PLACEHOLDER_VENUE)
    )
}

/// 2. Claimant qualification. Nationality, civil status and profession are not
/// collected by the form and are always the fixed literals.
pub fn claimant_section(form: &FormSubmission) -> String {
    format!(
        "**Qualificação Completa do Autor:** {name}, {AUTHOR_NATIONALITY}, {AUTHOR_CIVIL_STATUS}, {AUTHOR_PROFESSION}, \
portador(a) do CPF nº {cpf}, residente e domiciliado(a) em {address} (incluir CEP, se informado), \
e-mail: {email}, telefone: {phone}. Use exatamente os dados fornecidos; não invente dados ausentes.",
        name = or(&form.author_name, PLACEHOLDER_AUTHOR_NAME),
        cpf = or(&form.author_cpf, NOT_INFORMED),
        address = or(&form.author_address, NOT_INFORMED),
        email = or(&form.author_email, NOT_INFORMED),
        phone = or(&form.author_phone, NOT_INFORMED),
    )
}

/// 3. Respondent qualification. `company-details` carries both registration and seat.
pub fn respondent_section(form: &FormSubmission) -> String {
    let (cnpj, seat) = match form.company_details.as_deref() {
        Some(details) => (format!("(CNPJ: {details})"), format!("({details})")),
        None => (
            PLACEHOLDER_CNPJ.to_string(),
            PLACEHOLDER_COMPANY_ADDRESS.to_string(),
        ),
    };

    format!(
        "**Qualificação da Ré:** {}, pessoa jurídica de direito privado, inscrita no CNPJ sob o nº {cnpj}, com sede em {seat}.",
        or(&form.company_name, PLACEHOLDER_COMPANY_NAME)
    )
}

/// 4. Facts. The model writes the narrative; only the instruction goes here.
pub fn facts_section(form: &FormSubmission) -> String {
    format!(
        "{FACTS_INSTRUCTION} O problema relatado é do tipo: {}.",
        or(&form.problem_type, NOT_INFORMED)
    )
}

/// 5. Legal grounds. Same text for every submission.
pub fn legal_grounds_section(_form: &FormSubmission) -> String {
    LEGAL_GROUNDS_INSTRUCTION.to_string()
}

/// 6. Urgent relief, only when `urgent-decision` is exactly `"sim"`.
pub fn urgent_relief_section(form: &FormSubmission) -> String {
    if form.wants_urgent_relief() {
        URGENT_RELIEF_INSTRUCTION.to_string()
    } else {
        String::new()
    }
}

/// 7. Requested relief, as a lettered list.
pub fn relief_section(form: &FormSubmission) -> String {
    let mut section = RELIEF_HEADING.to_string();
    for (i, item) in relief_items(form).iter().enumerate() {
        let letter = char::from(b'a' + i as u8);
        section.push_str(&format!("\n    {letter}) {item}"));
    }
    section
}

fn relief_items(form: &FormSubmission) -> Vec<String> {
    let mut items = vec![RELIEF_CITATION.to_string()];
    if form.wants_urgent_relief() {
        items.push(RELIEF_URGENT.to_string());
    }
    items.push(RELIEF_BURDEN_OF_PROOF.to_string());
    items.push(merit_item(form));
    items.push(RELIEF_COSTS.to_string());
    items
}

fn merit_item(form: &FormSubmission) -> String {
    let mut item = if form.wants_urgent_relief() {
        "A procedência total da ação para confirmar a tutela de urgência".to_string()
    } else {
        "A procedência total da ação".to_string()
    };

    let condemnations: Vec<String> = [material_damages_item(form), moral_damages_item(form)]
        .into_iter()
        .flatten()
        .collect();

    if condemnations.is_empty() {
        item.push(';');
    } else {
        item.push_str(" e condenar a ré a:");
        for condemnation in condemnations {
            item.push_str(&format!("\n        - {condemnation}"));
        }
    }
    item
}

/// Material damages are claimed only for a present, non-zero amount.
fn material_damages_item(form: &FormSubmission) -> Option<String> {
    included_material_value(form)
        .map(|value| format!("Pagar indenização por danos materiais no valor de {value};"))
}

fn moral_damages_item(form: &FormSubmission) -> Option<String> {
    form.wants_moral_damages().then(|| {
        format!(
            "Pagar indenização por danos morais em valor de {}, ou em valor superior a ser arbitrado por Vossa Excelência;",
            or(&form.moral_value, DEFAULT_MORAL_VALUE)
        )
    })
}

fn included_material_value(form: &FormSubmission) -> Option<&str> {
    form.material_value
        .as_deref()
        .filter(|value| *value != ZERO_AMOUNT)
}

/// 8. Value of the claim: material plus moral, with a fixed moral addend when unset.
pub fn claim_value_section(form: &FormSubmission) -> String {
    format!(
        "**Seção \"DO VALOR DA CAUSA\":** Atribua à causa o valor resultante da soma do dano material ({}) \
com o dano moral ({}), expresso em reais.",
        included_material_value(form).unwrap_or(ZERO_AMOUNT),
        or(&form.moral_value, DEFAULT_MORAL_ADDEND)
    )
}

/// 9. Closing block, with the same venue and name fallbacks as above.
pub fn closing_section(form: &FormSubmission) -> String {
    format!(
        "**Fechamento:** \"{CLOSING_FORMULA}\n\n{}, {PLACEHOLDER_DATE}.\n\n{SIGNATURE_LINE}\n{}\"",
        or(&form.action_city_state, PLACEHOLDER_CLOSING_VENUE),
        or(&form.author_name, PLACEHOLDER_AUTHOR_NAME)
    )
}

/// Raw case data for the facts narrative: problem type plus the whole submission.
pub fn case_data_section(form: &FormSubmission) -> String {
    format!(
        "{CASE_DATA_HEADING}\n- **Tipo de Problema:** {}\n- **Resumo dos Dados Fornecidos:** {}",
        or(&form.problem_type, NOT_INFORMED),
        form.to_pretty_json()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn form(value: Value) -> FormSubmission {
        FormSubmission::from_map(value.as_object().unwrap().clone())
    }

    fn minimal() -> Value {
        json!({
            "problem-type": "Corte de energia indevido",
            "author-name": "Maria da Silva"
        })
    }

    fn with(extra: Value) -> FormSubmission {
        let mut base = minimal();
        for (k, v) in extra.as_object().unwrap() {
            base[k] = v.clone();
        }
        form(base)
    }

    #[test]
    fn test_absent_optional_fields_use_placeholders() {
        let prompt = build_prompt(&form(minimal()));

        assert!(prompt.contains("DA COMARCA DE [Cidade e Estado não informados]."));
        assert!(prompt.contains("portador(a) do CPF nº não informado"));
        assert!(prompt.contains("[Nome da empresa a ser apurado]"));
        assert!(prompt.contains("inscrita no CNPJ sob o nº (a ser consultado)"));
        assert!(prompt.contains("com sede em (endereço a ser consultado)"));
        assert!(prompt.contains("[Local], [Data]."));
        assert!(prompt.contains("brasileiro(a), estado civil desconhecido, profissão desconhecida"));
    }

    #[test]
    fn test_no_absent_marker_leaks_into_prompt() {
        let prompts = [
            build_prompt(&form(minimal())),
            build_prompt(&form(json!({"problem-type": "x", "author-name": "y", "moral-value": null}))),
            build_prompt(&FormSubmission::default()),
        ];
        for prompt in prompts {
            for marker in ["undefined", "null", "None"] {
                assert!(!prompt.contains(marker), "prompt leaked {marker:?}");
            }
        }
    }

    #[test]
    fn test_missing_name_in_closing_uses_placeholder() {
        let closing = closing_section(&FormSubmission::default());
        assert!(closing.ends_with("________________________________________\n[Nome Completo do Autor]\""));
    }

    #[test]
    fn test_present_fields_are_interpolated() {
        let submission = with(json!({
            "action-city-state": "Recife/PE",
            "author-cpf": "123.456.789-00",
            "author-address": "Rua das Flores, 10, CEP 50000-000",
            "company-name": "Companhia Energética",
            "company-details": "10.835.932/0001-08, Av. João de Barros, 111"
        }));
        let prompt = build_prompt(&submission);

        assert!(prompt.contains("DA COMARCA DE Recife/PE."));
        assert!(prompt.contains("Maria da Silva, brasileiro(a)"));
        assert!(prompt.contains("CPF nº 123.456.789-00"));
        assert!(prompt.contains("em Rua das Flores, 10, CEP 50000-000"));
        assert!(prompt.contains("Companhia Energética, pessoa jurídica"));
        assert!(prompt.contains("(CNPJ: 10.835.932/0001-08, Av. João de Barros, 111)"));
        assert!(prompt.contains("Recife/PE, [Data]."));
        assert!(prompt.contains("\nMaria da Silva\""));
    }

    #[test]
    fn test_urgent_section_only_for_exact_sim() {
        let urgent = build_prompt(&with(json!({"urgent-decision": "sim"})));
        assert!(urgent.contains("DA TUTELA DE URGÊNCIA"));
        assert!(urgent.contains("A concessão da tutela de urgência"));
        assert!(urgent.contains("6.  **Seção \"DA TUTELA DE URGÊNCIA\""));
        assert!(urgent.contains("9.  **Fechamento"));

        for value in [json!("Sim"), json!("yes"), json!("não"), json!(true)] {
            let prompt = build_prompt(&with(json!({"urgent-decision": value})));
            assert!(!prompt.contains("DA TUTELA DE URGÊNCIA"), "value {value}");
            assert!(!prompt.contains("A concessão da tutela de urgência"));
        }

        let absent = build_prompt(&form(minimal()));
        assert!(!absent.contains("DA TUTELA DE URGÊNCIA"));
        assert!(absent.contains("6.  **Seção \"DOS PEDIDOS\""));
        assert!(absent.contains("8.  **Fechamento"));
        assert!(!absent.contains("9.  "));
    }

    #[test]
    fn test_urgent_relief_section_is_empty_when_not_requested() {
        assert_eq!(urgent_relief_section(&form(minimal())), "");
    }

    #[test]
    fn test_relief_letters_stay_sequential() {
        let plain = relief_section(&form(minimal()));
        assert!(plain.contains("a) A citação da ré"));
        assert!(plain.contains("b) A inversão do ônus da prova"));
        assert!(plain.contains("c) A procedência total da ação;"));
        assert!(plain.contains("d) A condenação da ré ao pagamento das custas"));

        let urgent = relief_section(&with(json!({"urgent-decision": "sim"})));
        assert!(urgent.contains("b) A concessão da tutela de urgência"));
        assert!(urgent.contains("c) A inversão do ônus da prova"));
        assert!(urgent.contains("e) A condenação da ré"));
    }

    #[test]
    fn test_zero_material_value_is_suppressed() {
        let zero = relief_section(&with(json!({"material-value": "R$ 0,00"})));
        assert!(!zero.contains("danos materiais"));

        let absent = relief_section(&form(minimal()));
        assert!(!absent.contains("danos materiais"));

        let amount = relief_section(&with(json!({"material-value": "R$ 1.234,56"})));
        assert!(amount.contains("- Pagar indenização por danos materiais no valor de R$ 1.234,56;"));
    }

    #[test]
    fn test_moral_damages_require_exact_sim() {
        let default_value = relief_section(&with(json!({"dano-moral-pergunta": "sim"})));
        assert!(default_value.contains("danos morais em valor de R$ 5.000,00 (cinco mil reais)"));

        let given = relief_section(&with(json!({
            "dano-moral-pergunta": "sim",
            "moral-value": "R$ 10.000,00"
        })));
        assert!(given.contains("danos morais em valor de R$ 10.000,00, ou em valor superior"));

        for value in ["Sim", "não", "yes"] {
            let prompt = relief_section(&with(json!({
                "dano-moral-pergunta": value,
                "moral-value": "R$ 10.000,00"
            })));
            assert!(!prompt.contains("danos morais"), "value {value}");
        }
    }

    #[test]
    fn test_claim_value_falls_back_to_default_moral_addend() {
        let section = claim_value_section(&form(minimal()));
        assert!(section.contains("dano material (R$ 0,00)"));
        assert!(section.contains("dano moral (R$ 5.000,00)"));

        let section = claim_value_section(&with(json!({
            "material-value": "R$ 300,00",
            "moral-value": "R$ 8.000,00"
        })));
        assert!(section.contains("dano material (R$ 300,00)"));
        assert!(section.contains("dano moral (R$ 8.000,00)"));
    }

    #[test]
    fn test_case_data_embeds_whole_submission() {
        let submission = with(json!({"data-corte": "10/05/2024", "contas-pagas": true}));
        let data = case_data_section(&submission);
        assert!(data.contains("- **Tipo de Problema:** Corte de energia indevido"));
        assert!(data.contains("\"data-corte\": \"10/05/2024\""));
        assert!(data.contains("\"contas-pagas\": true"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let raw = json!({
            "problem-type": "Cobrança indevida",
            "author-name": "João Souza",
            "urgent-decision": "sim",
            "dano-moral-pergunta": "sim",
            "material-value": "R$ 450,00",
            "zeta": 1,
            "alpha": "primeiro"
        });
        assert_eq!(build_prompt(&form(raw.clone())), build_prompt(&form(raw)));
    }

    #[test]
    fn test_prompt_frame_order() {
        let prompt = build_prompt(&form(minimal()));
        let preamble = prompt.find("Você é um assistente jurídico").unwrap();
        let structure = prompt.find("ESTRUTURA DA PETIÇÃO:").unwrap();
        let data = prompt.find("DADOS DETALHADOS DO CASO PARA").unwrap();
        let request = prompt.find("Agora, redija a petição completa.").unwrap();
        assert!(preamble < structure && structure < data && data < request);
    }
}
