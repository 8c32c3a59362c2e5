mod openai_audio_test;
