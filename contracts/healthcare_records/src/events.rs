use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

/// Emitted when the managing institution is set or replaced
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstitutionSetEvent {
    pub institution: Address,
}

/// Emitted when a new patient is registered
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRegisteredEvent {
    pub patient_id: u64,
    pub name: String,
    pub patient_identity: Address,
}

/// Emitted when a medical record is issued
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordIssuedEvent {
    pub record_id: u64,
    pub patient_id: u64,
}

/// Emitted when a medical record is invalidated
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordInvalidatedEvent {
    pub record_id: u64,
}

pub fn publish_institution_set(env: &Env, institution: Address) {
    let event = InstitutionSetEvent { institution };
    env.events().publish((symbol_short!("INST_SET"),), event);
}

pub fn publish_patient_registered(
    env: &Env,
    patient_id: u64,
    name: String,
    patient_identity: Address,
) {
    let event = PatientRegisteredEvent {
        patient_id,
        name,
        patient_identity: patient_identity.clone(),
    };
    env.events()
        .publish((symbol_short!("PAT_REG"), patient_identity), event);
}

pub fn publish_record_issued(env: &Env, record_id: u64, patient_id: u64) {
    let event = RecordIssuedEvent {
        record_id,
        patient_id,
    };
    env.events()
        .publish((symbol_short!("REC_ISS"), patient_id), event);
}

pub fn publish_record_invalidated(env: &Env, record_id: u64) {
    let event = RecordInvalidatedEvent { record_id };
    env.events()
        .publish((symbol_short!("REC_INV"), record_id), event);
}
