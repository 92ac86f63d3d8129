use crate::domain::model::{RegisterError, RegisterResult};

pub const SUCCESS: u8 = 0;
pub const REJECTED: u8 = 1;
pub const SOMETHING_WENT_WRONG: u8 = 2;
pub const INPUT_ERROR: u8 = 3;

/// Process exit code for a finished registration attempt.
pub fn for_result(result: &RegisterResult) -> u8 {
    match result {
        Ok(_) => SUCCESS,
        Err(RegisterError::SomethingWentWrong) => SOMETHING_WENT_WRONG,
        Err(_) => REJECTED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Registration;

    #[test]
    fn test_exit_codes() {
        let ok: RegisterResult = Ok(Registration {
            speaker_id: 1,
            registration_fee: 500,
        });
        assert_eq!(for_result(&ok), SUCCESS);
        assert_eq!(for_result(&Err(RegisterError::SomethingWentWrong)), SOMETHING_WENT_WRONG);

        for rejection in [
            RegisterError::FirstNameRequired,
            RegisterError::LastNameRequired,
            RegisterError::EmailRequired,
            RegisterError::SpeakerDoesNotMeetStandards,
            RegisterError::NoSessionsProvided,
            RegisterError::NoSessionsApproved,
        ] {
            assert_eq!(for_result(&Err(rejection)), REJECTED, "{:?}", rejection);
        }
    }
}
